/*!
An engine for incrementally summing the values of groups of members.

Each *member* (a literal, a variable, etc.) has a [WatchValue]:
- [SATISFIED] (2), if the member is true,
- [UNDETERMINED] (1), if the member has no value, or
- [FALSIFIED] (0), if the member is false.

Members are grouped into *watch sets*, and each watch set keeps a running total of the values of its members.
A watch set is:
- *Unit* if the total is exactly 1, in which case no member is satisfied and a single member is undetermined.
- *Violated* if the total is exactly 0, in which case every member is falsified.

Each watch set has a list of owners (clauses, theory atoms, etc.).
Watch sets are deduplicated, and an owner added with the members of some existing watch set is added to the owners of that set.

When the value of a member is [set](Watches::set) the total of each set containing the member is adjusted, and unit and violated sets are kept in dedicated buckets.
So, [units](Watches::units) and [violated](Watches::violated) are each a walk over a bucket, rather than a walk over all sets.

# Example

```rust
# use otter_mcsat::db::watches::*;
let mut watches: Watches<char, usize> = Watches::default();

watches.add_watch(0, ['a', 'b']);
watches.add_watch(1, ['b', 'a']);
watches.add_watch(2, ['a', 'b', 'c']);

watches.set('a', FALSIFIED);
assert_eq!(watches.units().collect::<Vec<_>>(), vec![(0, 'b'), (1, 'b')]);

watches.set('b', FALSIFIED);
assert_eq!(watches.violated().collect::<Vec<_>>(), vec![0, 1]);
assert_eq!(watches.units().collect::<Vec<_>>(), vec![(2, 'c')]);
```
*/

use std::{
    collections::{BTreeSet, HashMap},
    hash::Hash,
};

/// The value of a member of a watch set.
pub type WatchValue = u8;

/// The value of a falsified member.
pub const FALSIFIED: WatchValue = 0;

/// The value of a member without a value.
pub const UNDETERMINED: WatchValue = 1;

/// The value of a satisfied member.
pub const SATISFIED: WatchValue = 2;

type SetIndex = usize;

struct WatchSet<M, O> {
    members: Vec<M>,
    total: usize,
    owners: Vec<O>,
}

/// Watch sets over members of type `M`, owned by owners of type `O`.
pub struct Watches<M, O> {
    sets: Vec<WatchSet<M, O>>,

    /// Sorted and deduplicated members to the set with those members.
    index: HashMap<Vec<M>, SetIndex>,

    /// The sets each member occurs in.
    occurrences: HashMap<M, Vec<SetIndex>>,

    /// Members absent from the map are [UNDETERMINED].
    values: HashMap<M, WatchValue>,

    units: BTreeSet<SetIndex>,
    violated: BTreeSet<SetIndex>,
}

impl<M, O> Default for Watches<M, O> {
    fn default() -> Self {
        Watches {
            sets: Vec::default(),
            index: HashMap::default(),
            occurrences: HashMap::default(),
            values: HashMap::default(),
            units: BTreeSet::default(),
            violated: BTreeSet::default(),
        }
    }
}

impl<M: Copy + Ord + Hash, O: Copy + PartialEq> Watches<M, O> {
    /// Adds `owner` to the watch set of `members`, creating the set if required.
    ///
    /// Returns true if a fresh watch set was created.
    pub fn add_watch(&mut self, owner: O, members: impl IntoIterator<Item = M>) -> bool {
        let mut members = members.into_iter().collect::<Vec<_>>();
        members.sort_unstable();
        members.dedup();

        if let Some(&set_index) = self.index.get(&members) {
            let owners = &mut self.sets[set_index].owners;
            if !owners.contains(&owner) {
                owners.push(owner);
            }
            return false;
        }

        let set_index = self.sets.len();
        let total = members
            .iter()
            .map(|member| self.value(member) as usize)
            .sum();

        for member in &members {
            self.occurrences.entry(*member).or_default().push(set_index);
        }
        self.index.insert(members.clone(), set_index);
        self.sets.push(WatchSet {
            members,
            total,
            owners: vec![owner],
        });
        refile(&mut self.units, &mut self.violated, set_index, None, total);

        true
    }

    /// The current value of `member`.
    pub fn value(&self, member: &M) -> WatchValue {
        *self.values.get(member).unwrap_or(&UNDETERMINED)
    }

    /// Sets the value of `member` to `value`, and updates the total of each set containing `member`.
    ///
    /// Values other than those of [FALSIFIED], [UNDETERMINED], and [SATISFIED] are a contract violation.
    pub fn set(&mut self, member: M, value: WatchValue) {
        let previous = self.value(&member);
        if previous == value {
            return;
        }
        match value {
            UNDETERMINED => self.values.remove(&member),
            _ => self.values.insert(member, value),
        };

        let Some(set_indicies) = self.occurrences.get(&member) else {
            return;
        };
        for &set_index in set_indicies {
            let set = &mut self.sets[set_index];
            let before = set.total;
            set.total = (set.total - previous as usize) + value as usize;
            refile(
                &mut self.units,
                &mut self.violated,
                set_index,
                Some(before),
                set.total,
            );
        }
    }

    /// Each (owner, undetermined member) pair of a unit watch set, ordered by the creation of the set.
    pub fn units(&self) -> impl Iterator<Item = (O, M)> + '_ {
        self.units.iter().flat_map(move |&set_index| {
            let set = &self.sets[set_index];
            let member = set
                .members
                .iter()
                .copied()
                .find(|member| self.value(member) != FALSIFIED);
            member
                .into_iter()
                .flat_map(move |member| set.owners.iter().map(move |&owner| (owner, member)))
        })
    }

    /// Each owner of a violated watch set, ordered by the creation of the set.
    pub fn violated(&self) -> impl Iterator<Item = O> + '_ {
        self.violated
            .iter()
            .flat_map(move |&set_index| self.sets[set_index].owners.iter().copied())
    }

    /// Each watch set, as a tuple of its members, total, and owners.
    pub fn watch_sets(&self) -> impl Iterator<Item = (&[M], usize, &[O])> {
        self.sets
            .iter()
            .map(|set| (set.members.as_slice(), set.total, set.owners.as_slice()))
    }

    /// The count of distinct watch sets.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

/// Moves a set between the unit and violated buckets, as required by a change in total.
fn refile(
    units: &mut BTreeSet<SetIndex>,
    violated: &mut BTreeSet<SetIndex>,
    set_index: SetIndex,
    before: Option<usize>,
    after: usize,
) {
    match before {
        Some(0) => {
            violated.remove(&set_index);
        }
        Some(1) => {
            units.remove(&set_index);
        }
        _ => {}
    }
    match after {
        0 => {
            violated.insert(set_index);
        }
        1 => {
            units.insert(set_index);
        }
        _ => {}
    }
}
