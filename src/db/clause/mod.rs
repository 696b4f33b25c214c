/*!
A database of clauses.

Clauses are stored in a [SlotMap] and accessed through a [ClauseKey].
Each clause is noted with a [ClauseSource], so original and learned clauses can be told apart.

# Watches

A clause is *watched* by placing a watch on its literals in a [Watches] structure.
The value of a literal on the watches follows the value of its atom:
- If the atom has a value matching the polarity of the literal, the literal is [SATISFIED].
- If the atom has a value opposite to the polarity of the literal, the literal is [FALSIFIED].
- Otherwise, the literal is [UNDETERMINED].

So, a watched clause is unit exactly when one literal of the clause is undetermined and all others are falsified, and violated exactly when every literal is falsified.

A clause may be [stored](ClauseDB::store) without being watched.
This is the case for a clause learned when learning is disabled, as the clause is still required as the reason for some assignment.
*/

use slotmap::SlotMap;

use crate::{
    db::{
        watches::{Watches, FALSIFIED, SATISFIED, UNDETERMINED},
        ClauseKey,
    },
    misc::log::targets,
    structures::{atom::Atom, clause::Clause, literal::Literal},
    types::err::{self},
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// Part of the formula.
    Original,

    /// Derived by resolution during conflict analysis.
    Resolution,

    /// Added by a theory atom during a solve.
    Theory,
}

#[derive(Clone, Debug)]
pub struct StoredClause {
    clause: Clause,
    source: ClauseSource,
    watched: bool,
}

impl StoredClause {
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    pub fn is_watched(&self) -> bool {
        self.watched
    }
}

#[derive(Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, StoredClause>,
    watches: Watches<Literal, ClauseKey>,
}

impl ClauseDB {
    /// Stores and watches a clause.
    pub fn add(&mut self, clause: Clause, source: ClauseSource) -> ClauseKey {
        let key = self.store(clause, source);
        self.watch_stored(key);
        key
    }

    /// Stores a clause without a watch.
    pub fn store(&mut self, clause: Clause, source: ClauseSource) -> ClauseKey {
        let key = self.clauses.insert(StoredClause {
            clause,
            source,
            watched: false,
        });
        log::trace!(target: targets::CLAUSE_DB, "Stored {:?} {key:?}: {}", source, self.clauses[key].clause);
        key
    }

    /// Watches a stored clause.
    pub fn watch(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        match self.clauses.contains_key(key) {
            true => {
                self.watch_stored(key);
                Ok(())
            }
            false => Err(err::ClauseDBError::Missing),
        }
    }

    fn watch_stored(&mut self, key: ClauseKey) {
        let stored = &mut self.clauses[key];
        if !stored.watched {
            stored.watched = true;
            self.watches
                .add_watch(key, stored.clause.literals().iter().copied());
        }
    }

    pub fn get(&self, key: ClauseKey) -> Result<&Clause, err::ClauseDBError> {
        match self.clauses.get(key) {
            Some(stored) => Ok(&stored.clause),
            None => Err(err::ClauseDBError::Missing),
        }
    }

    pub fn get_stored(&self, key: ClauseKey) -> Result<&StoredClause, err::ClauseDBError> {
        self.clauses.get(key).ok_or(err::ClauseDBError::Missing)
    }

    /// Each (clause, literal) pair such that the clause is watched and unit on the literal.
    pub fn unit_clauses(&self) -> impl Iterator<Item = (ClauseKey, Literal)> + '_ {
        self.watches.units()
    }

    /// Each watched clause with every literal falsified.
    pub fn violated_clauses(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.watches.violated()
    }

    /// Updates the watches on the literals of `atom` to reflect `atom` having `value`.
    pub fn assign_atom(&mut self, atom: Atom, value: bool) {
        self.watches.set(Literal::new(atom, value), SATISFIED);
        self.watches.set(Literal::new(atom, !value), FALSIFIED);
    }

    /// Updates the watches on the literals of `atom` to reflect `atom` having no value.
    pub fn deassign_atom(&mut self, atom: Atom) {
        self.watches.set(Literal::new(atom, true), UNDETERMINED);
        self.watches.set(Literal::new(atom, false), UNDETERMINED);
    }

    /// Each stored clause together with its key.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &StoredClause)> {
        self.clauses.iter()
    }

    /// A count of stored clauses from `source`.
    pub fn count(&self, source: ClauseSource) -> usize {
        self.clauses
            .values()
            .filter(|stored| stored.source == source)
            .count()
    }

    /// The watches on literals.
    pub fn watches(&self) -> &Watches<Literal, ClauseKey> {
        &self.watches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(index: u32, polarity: bool) -> Literal {
        Literal::new(Atom::Variable(index), polarity)
    }

    #[test]
    fn units_and_violations() {
        let mut clause_db = ClauseDB::default();
        let key = clause_db.add(
            Clause::new([literal(0, false), literal(1, true)]),
            ClauseSource::Original,
        );

        clause_db.assign_atom(Atom::Variable(0), true);
        assert_eq!(
            clause_db.unit_clauses().collect::<Vec<_>>(),
            vec![(key, literal(1, true))]
        );

        clause_db.assign_atom(Atom::Variable(1), false);
        assert_eq!(clause_db.violated_clauses().collect::<Vec<_>>(), vec![key]);

        clause_db.assign_atom(Atom::Variable(1), true);
        assert_eq!(clause_db.violated_clauses().count(), 0);
        assert_eq!(clause_db.unit_clauses().count(), 0);

        clause_db.deassign_atom(Atom::Variable(1));
        assert_eq!(clause_db.unit_clauses().count(), 1);
    }

    #[test]
    fn stored_clauses_are_silent() {
        let mut clause_db = ClauseDB::default();
        let key = clause_db.store(Clause::new([literal(0, true)]), ClauseSource::Resolution);

        assert_eq!(clause_db.unit_clauses().count(), 0);
        assert!(!clause_db.get_stored(key).unwrap().is_watched());

        assert_eq!(clause_db.watch(key), Ok(()));
        assert_eq!(
            clause_db.unit_clauses().collect::<Vec<_>>(),
            vec![(key, literal(0, true))]
        );
    }

    #[test]
    fn empty_clause_is_violated() {
        let mut clause_db = ClauseDB::default();
        let key = clause_db.add(Clause::default(), ClauseSource::Original);
        assert_eq!(clause_db.violated_clauses().collect::<Vec<_>>(), vec![key]);
    }

    #[test]
    fn deassign_then_assign_restores_totals() {
        let mut clause_db = ClauseDB::default();
        clause_db.add(
            Clause::new([literal(0, true), literal(1, true), literal(2, false)]),
            ClauseSource::Original,
        );
        clause_db.add(
            Clause::new([literal(0, false), literal(2, true)]),
            ClauseSource::Original,
        );
        clause_db.assign_atom(Atom::Variable(0), true);
        clause_db.assign_atom(Atom::Variable(2), true);

        let totals = |db: &ClauseDB| {
            db.watches()
                .watch_sets()
                .map(|(_, total, _)| total)
                .collect::<Vec<_>>()
        };
        let before = totals(&clause_db);

        clause_db.deassign_atom(Atom::Variable(2));
        assert_ne!(totals(&clause_db), before);
        clause_db.assign_atom(Atom::Variable(2), true);
        assert_eq!(totals(&clause_db), before);
    }
}
