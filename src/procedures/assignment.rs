/*!
Methods for assigning values to atoms.

Each assignment is recorded on the [trail](crate::db::trail), and the value of the atom is mirrored to the databases:
- If the atom is a variable, the value is set in the [variable database](crate::db::variable).
- If the value is Boolean, the watches on the literals of the atom are updated in the [clause database](crate::db::clause).

So, every change to the value of an atom passes through [set_value](Context::set_value) or [unset_atoms](Context::unset_atoms).
*/

use crate::{
    context::Context,
    db::{trail::Reason, ClauseKey, LevelIndex, VariableKey},
    dispatch::{
        library::delta::{self, Delta},
        macros::dispatch_delta,
        Dispatch,
    },
    misc::log::targets,
    structures::{atom::Atom, literal::Literal, value::Value},
    types::err::Conflict,
};

impl Context {
    /// Assigns `value` to `atom` at `level`, for `reason`.
    pub(crate) fn set_value(&mut self, atom: Atom, value: Value, reason: Reason, level: LevelIndex) {
        self.trail.record(atom, value, reason, level);
        if let Atom::Variable(key) = atom {
            self.variable_db.assign(key, value);
        }
        if let Value::Bool(b) = value {
            self.clause_db.assign_atom(atom, b);
        }
    }

    /// Clears the value of each atom above `level`, and returns a count of the atoms cleared.
    ///
    /// The trail is cleared in full before the databases are updated, so no intermediate state is observed.
    pub(crate) fn unset_atoms(&mut self, level: LevelIndex) -> usize {
        let cleared = self.trail.clear_above(level);
        for (atom, entry) in &cleared {
            if let Atom::Variable(key) = atom {
                self.variable_db.deassign(*key);
            }
            if let Value::Bool(_) = entry.value {
                self.clause_db.deassign_atom(*atom);
            }
        }
        cleared.len()
    }

    /// Opens a fresh level and assigns `value` to `atom` as a decision.
    ///
    /// # Panics
    /// If `atom` has a value.
    pub fn decide(&mut self, atom: Atom, value: Value) {
        assert!(
            self.trail.entry(atom).is_none(),
            "! Decision on {atom}, which already has a value"
        );
        let level = self.trail.open_level();
        log::trace!(target: targets::DECISION, "Decided {atom} = {value} at {level}");
        self.set_value(atom, value, Reason::Decided, level);
        dispatch_delta!(self, Delta::Trail(delta::Trail::Decision(atom, value)));
    }

    /// Sets `literal` true at the current level, as `key` is unit on `literal`.
    ///
    /// - If the literal is already true, nothing happens and false is returned.
    /// - If the literal is false, the clause is a conflict.
    /// - Otherwise, the literal is set and true is returned.
    pub fn clausal_propagate(
        &mut self,
        key: ClauseKey,
        literal: Literal,
    ) -> Result<bool, Conflict> {
        self.counters.clausal_propagations += 1;
        match self.value_of(literal.atom()) {
            Some(value) if value == literal.polarity() => Ok(false),
            Some(_) => Err(Conflict(key)),
            None => {
                let level = self.trail.level();
                self.set_value(
                    literal.atom(),
                    Value::Bool(literal.polarity()),
                    Reason::ClausalPropagation(key),
                    level,
                );
                log::trace!(target: targets::PROPAGATION, "{literal} from {key:?} at {level}");
                dispatch_delta!(self, Delta::Trail(delta::Trail::ClausalPropagation(literal, key)));
                Ok(true)
            }
        }
    }

    /// Sets `value` for the variable at the current level, as implied by some theory atom.
    ///
    /// Returns false, and does nothing, if the variable already has a value.
    pub fn semantic_assign(&mut self, variable: VariableKey, value: Value) -> bool {
        let atom = Atom::Variable(variable);
        if self.trail.entry(atom).is_some() {
            return false;
        }
        let level = self.trail.level();
        self.set_value(atom, value, Reason::SemanticEvaluation, level);
        self.counters.semantic_propagations += 1;

        log::trace!(target: targets::SEMANTIC, "{atom} = {value} at {level} on propagation");
        dispatch_delta!(self, Delta::Trail(delta::Trail::SemanticEvaluation(atom, value)));
        true
    }
}
