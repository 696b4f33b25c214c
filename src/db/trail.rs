/*!
The trail of assignments.

Each assignment on the trail is an [Entry], noting:
- The value assigned.
- The decision level of the assignment.
- The [Reason] for the assignment.
- The position of the assignment, a count of assignments made before the assignment.

At most one entry exists for an atom.

Assignments are grouped by level.
A semantic evaluation is made at the greatest level of the variables evaluated, which may be below the current level, and so the positions of entries are not ordered by level.

# Soundness
The trail records assignments, and nothing more.
Clearing levels from the trail does not clear the values held in the variable and clause databases, and those values should be cleared with the atoms returned.
*/

use std::collections::HashMap;

use crate::{
    db::{ClauseKey, LevelIndex},
    misc::log::targets,
    structures::{atom::Atom, value::Value},
};

/// The reason for an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// A decision.
    Decided,

    /// Unit propagation of the clause.
    ClausalPropagation(ClauseKey),

    /// Evaluation or propagation of a theory atom.
    SemanticEvaluation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub value: Value,
    pub level: LevelIndex,
    pub reason: Reason,
    pub position: usize,
}

pub struct Trail {
    entries: HashMap<Atom, Entry>,

    /// The atoms assigned at each level, with levels[0] the atoms assigned at level zero.
    levels: Vec<Vec<Atom>>,

    /// The position of the next assignment.
    position: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            entries: HashMap::default(),
            levels: vec![Vec::default()],
            position: 0,
        }
    }
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        (self.levels.len() - 1) as LevelIndex
    }

    /// Opens a fresh level, and returns the index of the level.
    pub fn open_level(&mut self) -> LevelIndex {
        self.levels.push(Vec::default());
        self.level()
    }

    /// Records an assignment to `atom`.
    ///
    /// # Panics
    /// If `atom` already has an entry, or `level` is above the current level.
    pub fn record(&mut self, atom: Atom, value: Value, reason: Reason, level: LevelIndex) {
        assert!(
            level <= self.level(),
            "! Assignment to {atom} at level {level}, above the current level {}",
            self.level()
        );
        let entry = Entry {
            value,
            level,
            reason,
            position: self.position,
        };
        if self.entries.insert(atom, entry).is_some() {
            panic!("! Assignment to {atom}, which already has a value");
        }
        self.levels[level as usize].push(atom);
        self.position += 1;

        log::trace!(target: targets::TRAIL, "{atom} = {value} at {level} from {reason:?}");
    }

    pub fn entry(&self, atom: Atom) -> Option<&Entry> {
        self.entries.get(&atom)
    }

    pub fn value_of(&self, atom: Atom) -> Option<Value> {
        self.entries.get(&atom).map(|entry| entry.value)
    }

    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.entries.get(&atom).map(|entry| entry.level)
    }

    pub fn reason_of(&self, atom: Atom) -> Option<Reason> {
        self.entries.get(&atom).map(|entry| entry.reason)
    }

    /// A count of assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The atoms assigned at `level`, in order of assignment.
    pub fn atoms_at(&self, level: LevelIndex) -> &[Atom] {
        match self.levels.get(level as usize) {
            Some(atoms) => atoms,
            None => &[],
        }
    }

    /// Each atom with an entry, together with the entry.
    pub fn iter(&self) -> impl Iterator<Item = (&Atom, &Entry)> {
        self.entries.iter()
    }

    /// Removes every level above `level`, and returns the entries removed.
    ///
    /// The current level is `level` after the call, if `level` was at most the current level.
    pub fn clear_above(&mut self, level: LevelIndex) -> Vec<(Atom, Entry)> {
        let keep = (level as usize + 1).min(self.levels.len());
        let cleared = self.levels.split_off(keep);

        let mut removed = Vec::default();
        for atom in cleared.into_iter().flatten() {
            if let Some(entry) = self.entries.remove(&atom) {
                removed.push((atom, entry));
            }
        }
        removed
    }
}
