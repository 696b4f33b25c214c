//! A library for determining the satisfiability of clauses over Boolean and theory atoms.
//!
//! otter_mcsat is a conflict-driven satisfiability engine in the style of model-constructing satisfiability (mcSAT).
//! Clauses are built from literals, and a literal is an atom paired with a polarity.
//! An atom is either a Boolean variable, or a theory atom whose value follows from the values of some (theory) variables.
//!
//! The engine decides, propagates, and on conflict learns a clause by resolution and backtracks non-chronologically.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! A context is built from a [configuration](crate::config) and an optional [dispatcher](crate::dispatch) for observing a solve.
//! Variables and clauses are added [programatically](crate::context::Context::add_clause) or through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula.
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - The [variable database](crate::db::variable) stores variables, their values, and the order in which variables are decided.
//! - The [clause database](crate::db::clause) stores original and learned clauses.
//! - The [trail](crate::db::trail) records each assignment together with its decision level and reason.
//!
//! Both the variable and clause databases are built on a [watch engine](crate::db::watches), which incrementally sums the values of groups of members to identify unit and violated groups.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve).
//! - [Conflict analysis](crate::procedures::analysis) and [backtracking](crate::procedures::backtrack).
//! - The [theory atom](crate::structures::atom::TheoryAtom) interface, for semantic propagation.
//!
//! # Examples
//!
//! ```rust
//! # use otter_mcsat::config::Config;
//! # use otter_mcsat::context::Context;
//! # use otter_mcsat::dispatch::library::report::Report;
//! let mut the_context = Context::from_config(Config::default(), None);
//!
//! let x = the_context.bool_variable("x").unwrap();
//! let y = the_context.bool_variable("y").unwrap();
//!
//! assert!(the_context.add_clause(vec![x.negate(), y]).is_ok());
//! assert!(the_context.add_clause(vec![x.negate(), y.negate()]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(x.atom()), Some(false));
//! ```
//!
//! ```rust
//! # use otter_mcsat::context::Context;
//! # use otter_mcsat::config::Config;
//! # use otter_mcsat::dispatch::library::report::Report;
//! let mut the_context = Context::from_config(Config::default(), None);
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs of conflict analysis can be filtered with `RUST_LOG=analysis …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod dispatch;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
