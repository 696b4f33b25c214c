/*!
Propagation of the consequences of assignments.

Each round of propagation runs three procedures in turn, until a round makes no assignment:

- [Semantic evaluation](Context::semantic_evaluation), which records the value of each theory atom without a value whose variables are all assigned.
- [Clausal propagation](Context::clausal_propagation), which returns a conflict if some watched clause is violated and otherwise sets the literal of each unit clause.
- [Semantic propagation](Context::semantic_propagation), which asks theory atoms with one variable unassigned to propagate.

Semantic propagation is only made once clausal propagation makes no assignment.

Progress is measured by growth of the trail.
So, for example, a theory atom which declines to make an assignment when asked to propagate does not lead to a further round of propagation.

# Evaluation

A theory atom is evaluated only if the atom has no value, and is assigned the value of the evaluation at the greatest level of its variables.
Evaluation comes first in each round, so an atom whose variables were completed by a theory hook takes its evaluation before clausal propagation may value it.

If the atom already has a value, the value is kept.
A value which disagrees with the evaluation is caught by [inconsistent_theory_atom](Context::inconsistent_theory_atom) before a solve reports satisfiable.
*/

use std::rc::Rc;

use crate::{
    context::Context,
    db::{trail::Reason, LevelIndex, TheoryKey},
    dispatch::{
        library::delta::{self, Delta},
        macros::dispatch_delta,
        Dispatch,
    },
    misc::log::targets,
    structures::{atom::Atom, value::Value},
    types::err::Conflict,
};

impl Context {
    /// Propagates until no further assignment is made, or a conflict is found.
    pub fn propagate(&mut self) -> Result<(), Conflict> {
        loop {
            let assignments = self.trail.len();

            self.semantic_evaluation();
            self.clausal_propagation()?;
            if self.trail.len() > assignments {
                continue;
            }

            self.semantic_propagation()?;
            if self.trail.len() == assignments {
                return Ok(());
            }
        }
    }

    /// Returns the first violated clause as a conflict, if one exists, and otherwise sets the literal of each unit clause.
    pub fn clausal_propagation(&mut self) -> Result<(), Conflict> {
        if let Some(key) = self.clause_db.violated_clauses().next() {
            log::trace!(target: targets::PROPAGATION, "Conflict: {key:?}");
            return Err(Conflict(key));
        }

        let units = self.clause_db.unit_clauses().collect::<Vec<_>>();
        for (key, literal) in units {
            self.clausal_propagate(key, literal)?;
        }
        Ok(())
    }

    /// Evaluates each theory atom without a value whose variables are all assigned.
    pub fn semantic_evaluation(&mut self) {
        let evaluable = self
            .variable_db
            .fully_assigned()
            .filter(|key| self.trail.entry(Atom::Theory(*key)).is_none())
            .collect::<Vec<_>>();

        for key in evaluable {
            self.evaluate_theory_atom(key);
        }
    }

    /// Asks each theory atom with a single variable unassigned to propagate.
    pub fn semantic_propagation(&mut self) -> Result<(), Conflict> {
        let units = self.variable_db.semantic_units().collect::<Vec<_>>();
        for (key, variable) in units {
            // Some earlier propagation may have assigned the variable
            if self.trail.entry(Atom::Variable(variable)).is_some() {
                continue;
            }
            let Some(theory_atom) = self.theory_atoms.get(key as usize).map(Rc::clone) else {
                continue;
            };
            theory_atom.propagate(Atom::Theory(key), variable, self)?;
        }

        Ok(())
    }

    /// Records the value of a theory atom, if the atom can be evaluated.
    fn evaluate_theory_atom(&mut self, key: TheoryKey) {
        let Some(theory_atom) = self.theory_atoms.get(key as usize).map(Rc::clone) else {
            return;
        };
        let Some(value) = theory_atom.evaluate(&self.variable_db) else {
            log::trace!(target: targets::SEMANTIC, "No evaluation of {theory_atom}");
            return;
        };

        let level = theory_atom
            .variables()
            .into_iter()
            .filter_map(|variable| self.trail.level_of(Atom::Variable(variable)))
            .max()
            .unwrap_or(0 as LevelIndex);

        let atom = Atom::Theory(key);
        self.set_value(atom, Value::Bool(value), Reason::SemanticEvaluation, level);
        self.counters.semantic_evaluations += 1;

        log::trace!(target: targets::SEMANTIC, "{theory_atom} evaluates to {value} at {level}");
        dispatch_delta!(self, Delta::Trail(delta::Trail::SemanticEvaluation(atom, Value::Bool(value))));
    }

    /// The first theory atom whose value disagrees with the evaluation of the atom, if any.
    pub fn inconsistent_theory_atom(&self) -> Option<TheoryKey> {
        self.theory_atoms.iter().enumerate().find_map(|(index, theory_atom)| {
            let key = index as TheoryKey;
            let value = self.value_of(Atom::Theory(key))?;
            match theory_atom.evaluate(&self.variable_db) {
                Some(evaluation) if evaluation != value => Some(key),
                _ => None,
            }
        })
    }
}
