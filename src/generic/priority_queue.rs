/*!
A max priority queue on indicies, with lazy removal.

Elements are indicies, each pushed with some priority.
Removal of an index does not restructure the heap, and instead marks the index as absent.
Any entry for an absent index is skipped (and discarded) when popping.

Liveness is tracked by a stamp for each index.
Each push issues a fresh stamp, and an entry on the heap is live only if the stamp of the entry is the current stamp of the index.
So, pushing an index which is already present simply makes any earlier entry for the index stale.

[LazyPriorityQueue] is used by the [variable database](crate::db::variable) to choose which variable to decide, as variables are associated with an index and a priority derived from the sort of the variable.

Ties between equal priorities are broken in favour of the lower index, so for a fixed sequence of pushes and removals the sequence of pops is fixed.

```rust
# use otter_mcsat::generic::priority_queue::LazyPriorityQueue;
let mut queue = LazyPriorityQueue::default();

queue.push(0, 1);
queue.push(1, 2);
queue.push(2, 1);

assert!(queue.remove(2));
assert_eq!(queue.len(), 2);

assert_eq!(queue.pop(), Some(1));
assert_eq!(queue.pop(), Some(0));
assert!(queue.pop().is_none());
```
*/

use std::{cmp::Reverse, collections::BinaryHeap};

/// The priority of an index.
pub type Priority = u8;

/// An entry on the heap.
///
/// The derived order compares priority first and then prefers the lower index.
/// Stamps are unique, and only break ties between entries for the same index.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: Priority,
    index: Reverse<usize>,
    stamp: u64,
}

/// The queue struct.
#[derive(Debug, Default)]
pub struct LazyPriorityQueue {
    heap: BinaryHeap<Entry>,

    /// The stamp of the live entry of each index, if the index is present.
    live: Vec<Option<u64>>,

    /// A count of present indicies.
    live_count: usize,

    /// The next stamp to issue.
    stamp: u64,
}

impl LazyPriorityQueue {
    /// Pushes `index` with `priority`.
    ///
    /// If `index` is already present the priority is replaced.
    pub fn push(&mut self, index: usize, priority: Priority) {
        if self.live.len() <= index {
            self.live.resize(index + 1, None);
        }

        let stamp = self.stamp;
        self.stamp += 1;

        if self.live[index].replace(stamp).is_none() {
            self.live_count += 1;
        }

        self.heap.push(Entry {
            priority,
            index: Reverse(index),
            stamp,
        });
    }

    /// Marks `index` as absent, without restructuring the heap.
    ///
    /// Returns true if `index` was present, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.live.get_mut(index).and_then(|stamp| stamp.take()) {
            Some(_) => {
                self.live_count -= 1;
                true
            }
            None => false,
        }
    }

    /// Pops the present index with the highest priority, discarding any stale entries on the way.
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let Reverse(index) = entry.index;
            if self.live[index] == Some(entry.stamp) {
                self.live[index] = None;
                self.live_count -= 1;
                return Some(index);
            }
        }
        None
    }

    /// True if `index` is present, false otherwise.
    pub fn contains(&self, index: usize) -> bool {
        self.live.get(index).is_some_and(|stamp| stamp.is_some())
    }

    /// A count of present indicies.
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// True if no index is present, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_simple() {
        let mut queue = LazyPriorityQueue::default();
        queue.push(6, 1);
        queue.push(5, 2);
        queue.push(4, 3);
        queue.push(1, 6);
        queue.push(0, 7);

        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(6));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn queue_ties() {
        let mut queue = LazyPriorityQueue::default();
        queue.push(3, 1);
        queue.push(1, 1);
        queue.push(2, 2);
        queue.push(0, 1);

        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(3));
    }

    #[test]
    fn queue_remove() {
        let mut queue = LazyPriorityQueue::default();
        queue.push(6, 6);
        queue.push(5, 5);
        queue.push(4, 4);
        queue.push(1, 1);
        queue.push(0, 0);

        assert!(queue.remove(4));
        assert!(!queue.remove(4));
        assert!(queue.remove(6));
        assert!(!queue.remove(600));
        assert_eq!(queue.len(), 3);

        queue.push(4, 4);
        assert_eq!(queue.len(), 4);

        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(0));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_repush() {
        let mut queue = LazyPriorityQueue::default();
        queue.push(0, 1);
        queue.push(0, 1);
        queue.push(1, 1);
        assert_eq!(queue.len(), 2);

        assert!(queue.remove(0));
        queue.push(0, 1);
        assert!(queue.contains(0));

        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
        assert!(queue.pop().is_none());
    }
}
