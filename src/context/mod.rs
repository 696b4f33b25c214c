/*!
The context, to which formulas are added and within which solves take place.

A context owns each database used during a solve, together with the configuration of the solve, counters, and an optional dispatcher.

- Methods to build a formula are found in [builder](crate::builder).
- Methods to solve are found in [procedures](crate::procedures).

# Example
```rust
# use otter_mcsat::context::Context;
# use otter_mcsat::config::Config;
# use otter_mcsat::dispatch::library::report::Report;
let mut the_context = Context::from_config(Config::default(), None);

let p = the_context.bool_variable("p").unwrap();
let q = the_context.bool_variable("q").unwrap();

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p.atom()), Some(false));
assert_eq!(the_context.value_of(q.atom()), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use std::rc::Rc;

use crate::{
    config::Config,
    db::{clause::ClauseDB, trail::Trail, variable::VariableDB, ClauseKey, TheoryKey},
    dispatch::{library::report::Report, Dispatch},
    structures::{atom::Atom, atom::TheoryAtom, literal::Literal, value::Value},
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the formula is unknown, though a solve has begun.
    Solving,

    /// The formula is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The formula is known to be inconsistent, with the empty clause derived.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// The type of a dispatcher.
pub type Dispatcher = dyn Fn(Dispatch);

pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The variable database.
    /// See [db::variable](crate::db::variable) for details.
    pub variable_db: VariableDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// Theory atoms, indexed by [TheoryKey].
    pub(crate) theory_atoms: Vec<Rc<dyn TheoryAtom>>,

    /// The status of the context.
    pub state: ContextState,

    /// A function to which dispatches are sent, if present.
    pub(crate) dispatcher: Option<Box<Dispatcher>>,
}

impl Context {
    /// Creates a context from some given configuration, with an optional dispatcher.
    pub fn from_config(config: Config, dispatcher: Option<Box<Dispatcher>>) -> Self {
        Context {
            config,
            counters: Counters::default(),
            variable_db: VariableDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            theory_atoms: Vec::default(),
            state: ContextState::Input,
            dispatcher,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Solving => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The boolean value of an atom, if the atom has a boolean value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.trail.value_of(atom).and_then(|value| value.as_bool())
    }

    /// The value of a literal, if the atom of the literal has a boolean value.
    pub fn literal_value(&self, literal: Literal) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Each variable by name, together with the value of the variable, in the order variables were added.
    pub fn valuation(&self) -> impl Iterator<Item = (&str, Option<Value>)> {
        self.variable_db
            .iter()
            .map(|(_, variable)| (variable.name(), variable.value()))
    }

    /// Whether some literal of the clause is true.
    pub fn clause_satisfied(&self, key: ClauseKey) -> Result<bool, err::ErrorKind> {
        let clause = self.clause_db.get(key)?;
        Ok(clause
            .iter()
            .any(|literal| self.literal_value(*literal) == Some(true)))
    }

    /// The theory atom with the given key.
    pub fn theory(&self, key: TheoryKey) -> Result<&Rc<dyn TheoryAtom>, err::ErrorKind> {
        self.theory_atoms
            .get(key as usize)
            .ok_or(err::ErrorKind::from(err::BuildError::UnknownAtom))
    }
}
