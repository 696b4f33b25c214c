/*!
Methods for choosing the value of a variable.

# Overview

A decision is made on the variable without a value of highest priority, as held in the [variable database](crate::db::variable).
The priority of a variable is fixed by its [Sort](crate::structures::atom::Sort), and ties are broken by the order in which variables were added.

The value given is the [default decision](crate::structures::atom::Sort::decision) of the sort of the variable:
- `false`, for a Boolean variable.
- `0`, for a rational variable.

Any better value for a rational variable is left to the theory atoms of the variable, through [semantic propagation](crate::procedures::propagation).
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{atom::Atom, value::Value},
    types::err::{self},
};

/// Possible 'Ok' results from choosing a value to assign a variable.
pub enum DecisionOk {
    /// Some value was assigned to some atom.
    Decision(Atom, Value),

    /// All variables had already been assigned values, so no decision could be made.
    Exhausted,
}

impl Context {
    /// Decides a value for the variable without a value of highest priority, if one exists.
    pub fn make_decision(&mut self) -> Result<DecisionOk, err::ErrorKind> {
        if !self.variable_db.can_decide() {
            return Ok(DecisionOk::Exhausted);
        }
        let Some(key) = self.variable_db.pop() else {
            return Ok(DecisionOk::Exhausted);
        };
        let value = self.variable_db.get(key)?.sort().decision();

        self.counters.decisions += 1;
        let atom = Atom::Variable(key);
        log::trace!(target: targets::DECISION, "Decision {} on {atom}", self.counters.decisions);
        self.decide(atom, value);

        Ok(DecisionOk::Decision(atom, value))
    }
}
