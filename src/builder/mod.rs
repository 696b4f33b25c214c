/*!
Tools for building a context.

# Basic methods

- [bool_variable](crate::context::Context::bool_variable), to add a Boolean variable and obtain a literal over the variable.
- [variable](crate::context::Context::variable), to add a variable of any [Sort].
- [theory_atom](crate::context::Context::theory_atom), to add a theory atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may also be read from its [DIMACS](crate::context::Context::read_dimacs) representation.

# Example

```rust
# use otter_mcsat::context::Context;
# use otter_mcsat::config::Config;
# use otter_mcsat::dispatch::library::report::Report;
let mut the_context = Context::from_config(Config::default(), None);
let p = the_context.bool_variable("p").unwrap();
let q = the_context.bool_variable("q").unwrap();

assert!(the_context.add_clause(vec![p, -q]).is_ok());
assert!(the_context.add_clause(vec![-p, q]).is_ok());
assert!(the_context.bool_variable("p").is_err());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

mod dimacs;

use std::rc::Rc;

use crate::{
    context::{Context, ContextState},
    db::{clause::ClauseSource, ClauseKey, VariableKey},
    dispatch::{
        library::delta::{self, Delta},
        macros::dispatch_delta,
        Dispatch,
    },
    misc::log::targets,
    structures::{
        atom::{Atom, Sort, TheoryAtom},
        clause::Clause,
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Adds a variable of the given sort.
    pub fn variable(&mut self, name: &str, sort: Sort) -> Result<VariableKey, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::BuildError::SolveStarted.into());
        }
        let key = self.variable_db.add(name, sort)?;
        self.counters.variables += 1;
        Ok(key)
    }

    /// Adds a Boolean variable, and returns the literal of the variable with positive polarity.
    pub fn bool_variable(&mut self, name: &str) -> Result<Literal, ErrorKind> {
        let key = self.variable(name, Sort::Bool)?;
        Ok(Literal::new(Atom::Variable(key), true))
    }

    /// Adds a theory atom, and watches the variables of the atom for semantic propagation.
    pub fn theory_atom(&mut self, theory_atom: Rc<dyn TheoryAtom>) -> Result<Atom, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::BuildError::SolveStarted.into());
        }
        let variables = theory_atom.variables();
        for variable in &variables {
            self.variable_db.get(*variable)?;
        }

        let key = self.theory_atoms.len() as u32;
        self.variable_db.watch(key, variables);
        log::trace!(target: targets::SEMANTIC, "Added {theory_atom} as {key}");
        self.theory_atoms.push(theory_atom);

        Ok(Atom::Theory(key))
    }

    /// Adds the negation of a theory atom, as given by [negate](TheoryAtom::negate).
    pub fn negate_theory_atom(&mut self, atom: Atom) -> Result<Atom, ErrorKind> {
        match atom {
            Atom::Theory(key) => {
                let negation = self.theory(key)?.negate();
                self.theory_atom(negation)
            }
            Atom::Variable(_) => Err(err::BuildError::UnknownAtom.into()),
        }
    }

    /// Adds a clause to the context.
    ///
    /// Anything which can be made into a [Clause] may be added, e.g. a literal or a vector of literals.
    ///
    /// The empty clause may be added, in which case the formula is unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Into<Clause>) -> Result<ClauseKey, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::BuildError::SolveStarted.into());
        }
        let clause = clause.into();
        self.check_literals(&clause)?;

        let key = self.clause_db.add(clause, ClauseSource::Original);
        self.counters.original_clauses += 1;
        dispatch_delta!(self, Delta::ClauseDB(delta::ClauseDB::Original(key)));

        Ok(key)
    }

    /// Adds a clause during a solve, on behalf of some theory atom.
    ///
    /// The clause is watched immediately, and should be a consequence of the theory.
    pub fn theory_lemma(&mut self, clause: impl Into<Clause>) -> Result<ClauseKey, ErrorKind> {
        let clause = clause.into();
        self.check_literals(&clause)?;

        let key = self.clause_db.add(clause, ClauseSource::Theory);
        dispatch_delta!(self, Delta::ClauseDB(delta::ClauseDB::Lemma(key)));

        Ok(key)
    }

    /// Ensures each literal of the clause is over a known Boolean atom.
    fn check_literals(&self, clause: &Clause) -> Result<(), ErrorKind> {
        for literal in clause.iter() {
            match literal.atom() {
                Atom::Variable(key) => {
                    if self.variable_db.get(key)?.sort() != Sort::Bool {
                        log::error!(target: targets::CLAUSE_DB, "Literal over a non-Boolean variable: {literal}");
                        return Err(err::BuildError::NonBooleanLiteral.into());
                    }
                }
                Atom::Theory(key) => {
                    self.theory(key)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn literal_checks() {
        let mut the_context = Context::from_config(Config::default(), None);
        let p = the_context.bool_variable("p").unwrap();
        let r = the_context.variable("r", Sort::Rat).unwrap();

        assert!(the_context.add_clause(p).is_ok());
        assert_eq!(
            the_context.add_clause(Literal::new(Atom::Variable(r), true)),
            Err(ErrorKind::Build(err::BuildError::NonBooleanLiteral))
        );
        assert_eq!(
            the_context.add_clause(Literal::new(Atom::Theory(0), true)),
            Err(ErrorKind::Build(err::BuildError::UnknownAtom))
        );
        assert_eq!(
            the_context.add_clause(Literal::new(Atom::Variable(7), true)),
            Err(ErrorKind::VariableDB(err::VariableDBError::UnknownVariable))
        );
        assert_eq!(the_context.counters.original_clauses, 1);
    }

    #[test]
    fn no_input_after_solve() {
        let mut the_context = Context::from_config(Config::default(), None);
        let p = the_context.bool_variable("p").unwrap();
        assert!(the_context.solve().is_ok());

        assert_eq!(
            the_context.add_clause(p),
            Err(ErrorKind::Build(err::BuildError::SolveStarted))
        );
        assert!(the_context.bool_variable("q").is_err());
    }
}
