/*!
Atoms, the primitive propositions of a formula.

An [Atom] is either:
- A [variable](Atom::Variable) of [Sort::Bool], which *is* a proposition, or
- A [theory atom](Atom::Theory), whose value follows from the values of some variables.

Variables of [Sort::Rat] are also indexed as atoms, to keep a single trail of assignments, though literals over such variables are rejected.

# Theory atoms

Theory atoms implement the [TheoryAtom] trait, and are registered with a context through [theory_atom](crate::context::Context::theory_atom).
On registration, a watch is placed on the variables of the atom in the [variable database](crate::db::variable).
Then, during a solve:
- When every variable of the atom has a value, the atom is [evaluated](TheoryAtom::evaluate).
- When exactly one variable of the atom remains without a value, the atom is asked to [propagate](TheoryAtom::propagate).
*/

use std::rc::Rc;

use crate::{
    context::Context,
    db::{variable::VariableDB, TheoryKey, VariableKey},
    generic::priority_queue::Priority,
    structures::value::Value,
    types::err::Conflict,
};

/// An atom, indexed by the key of the relevant database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Variable(VariableKey),
    Theory(TheoryKey),
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Variable(key) => write!(f, "v{key}"),
            Atom::Theory(key) => write!(f, "t{key}"),
        }
    }
}

/// The sort of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Bool,
    Rat,
}

impl Sort {
    /// The priority of deciding a variable of the sort.
    ///
    /// Variables with a greater priority are decided first.
    pub fn priority(&self) -> Priority {
        match self {
            Sort::Bool => 1,
            Sort::Rat => 2,
        }
    }

    /// The value given to a variable of the sort on a decision.
    pub fn decision(&self) -> Value {
        match self {
            Sort::Bool => Value::Bool(false),
            Sort::Rat => Value::Rat(0.0),
        }
    }
}

/// The interface of a theory atom.
pub trait TheoryAtom: std::fmt::Display {
    /// The variables the value of the atom depends on.
    fn variables(&self) -> Vec<VariableKey>;

    /// The value of the atom, given the current values of the variable database.
    ///
    /// Called only when each of the [variables](TheoryAtom::variables) has a value, though [None] may be returned if the atom cannot be evaluated.
    fn evaluate(&self, variable_db: &VariableDB) -> Option<bool>;

    /// The negation of the atom.
    fn negate(&self) -> Rc<dyn TheoryAtom>;

    /// Called when each variable of the atom other than `unassigned` has a value.
    ///
    /// `this` is the atom as registered, and so its value may be read from the context.
    /// Any implied value should be recorded through [semantic_assign](Context::semantic_assign).
    ///
    /// By default, nothing happens.
    /// Without a hook, a later decision may give the atom's variables values which disagree with the atom's value.
    /// A solve which ends with such a disagreement reports [Unknown](crate::dispatch::library::report::Report::Unknown).
    #[allow(unused_variables)]
    fn propagate(
        &self,
        this: Atom,
        unassigned: VariableKey,
        context: &mut Context,
    ) -> Result<(), Conflict> {
        Ok(())
    }
}
