//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! Each iteration of a solve begins with [propagation](crate::procedures::propagation):
//!
//! - If propagation finds a violated clause, the clause is [analysed](crate::procedures::analysis).
//!   + If analysis derives the empty clause, the formula is unsatisfiable.
//!   + Otherwise, the derived clause is stored and used to [backtrack](crate::procedures::backtrack).
//!     If learning is enabled, the clause is also watched, so it takes part in further propagation.
//! - Otherwise, a [decision](crate::procedures::decision) is made.
//!   If every variable has a value, no decision can be made and the formula is satisfiable.
//!   Unless some theory atom has a value which disagrees with its evaluation, in which case the report is unknown.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> satisfiable, if every variable has a value
//!   |       +---------------+
//!   |               ⌃
//!   |               | if no clause is violated
//!   ⌄   +-----------+
//! --+-->| propagate |
//!   ⌃   +-----------+
//!   |               | if some clause is violated
//!   |               ⌄
//!   |       +------------------+
//!   |       | analyse_conflict |-----> unsatisfiable, if the empty clause is derived
//!   |       +------------------+
//!   |               |
//!   |               ⌄
//!   |       +----------------+
//!   +-------| backtrack_with |
//!           +----------------+
//! ```
//!
//! A time limit may be given in the [configuration](crate::config::Config), and is checked once each iteration.
//!
//! # Example
//!
//! ```rust
//! # use otter_mcsat::config::Config;
//! # use otter_mcsat::context::Context;
//! # use otter_mcsat::dispatch::library::report::Report;
//! let mut the_context = Context::from_config(Config::default(), None);
//!
//! let p = the_context.bool_variable("p").unwrap();
//! let q = the_context.bool_variable("q").unwrap();
//! let r = the_context.bool_variable("r").unwrap();
//!
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, -q]).is_ok());
//! assert!(the_context.add_clause(vec![p, r]).is_ok());
//! assert!(the_context.add_clause(vec![p, -r]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! assert!(the_context.counters.conflicts > 0);
//! ```

use crate::{
    context::{Context, ContextState},
    db::clause::ClauseSource,
    dispatch::{
        library::{
            delta::{self, Delta},
            report::Report,
        },
        macros::{dispatch_delta, dispatch_stats},
        Dispatch,
    },
    misc::log::targets,
    procedures::decision::DecisionOk,
    types::err::{self, Conflict},
};

impl Context {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// For details, see [procedures::solve](crate::procedures::solve).
    ///
    /// Once satisfiability has been determined, further calls return the same report.
    /// After a [TimeUp](Report::TimeUp) a further call continues the solve.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            ContextState::Input | ContextState::Solving => {}
        }
        self.state = ContextState::Solving;

        let total_time = std::time::Instant::now();
        let previous_time = self.counters.time;

        let report = 'solve_loop: loop {
            self.counters.iterations += 1;
            log::trace!(target: targets::PROPAGATION, "Iteration {}", self.counters.iterations);

            self.counters.time = previous_time + total_time.elapsed();
            let time_limit = self.config.time_limit;
            if time_limit.is_some_and(|limit| self.counters.time >= limit) {
                break 'solve_loop Report::TimeUp;
            }

            match self.propagate() {
                Err(Conflict(key)) => {
                    self.counters.conflicts += 1;

                    let analysed = self.analyse_conflict(key)?;
                    if analysed.is_empty() {
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop Report::Unsatisfiable;
                    }

                    let unchanged = self.clause_db.get(key)? == &analysed;
                    let key = match unchanged {
                        true => key,
                        false => {
                            let derived = self.clause_db.store(analysed, ClauseSource::Resolution);
                            dispatch_delta!(self, Delta::ClauseDB(delta::ClauseDB::Derived(derived)));
                            derived
                        }
                    };

                    self.backtrack_with(key)?;

                    if self.config.learning && !self.clause_db.get_stored(key)?.is_watched() {
                        self.clause_db.watch(key)?;
                        self.counters.learned_clauses += 1;
                        dispatch_delta!(self, Delta::ClauseDB(delta::ClauseDB::Learned(key)));
                    }
                }

                Ok(()) => match self.make_decision()? {
                    DecisionOk::Decision(_, _) => continue 'solve_loop,
                    DecisionOk::Exhausted => {
                        if let Some(key) = self.inconsistent_theory_atom() {
                            log::warn!(target: targets::SEMANTIC, "Theory atom {key} disagrees with its evaluation");
                            break 'solve_loop Report::Unknown;
                        }
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop Report::Satisfiable;
                    }
                },
            }
        };

        self.counters.time = previous_time + total_time.elapsed();
        log::info!(target: targets::PROPAGATION, "Solve: {report} after {} conflicts", self.counters.conflicts);

        dispatch_stats!(self);
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(Dispatch::Report(report));
            dispatcher(Dispatch::Finish);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, dispatch::library::report::Report};
    use std::time::Duration;

    #[test]
    fn time_up() {
        let config = Config {
            time_limit: Some(Duration::from_secs(0)),
            ..Config::default()
        };
        let mut the_context = Context::from_config(config, None);
        let p = the_context.bool_variable("p").unwrap();
        assert!(the_context.add_clause(p).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::TimeUp));
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn repeat_solve() {
        let mut the_context = Context::from_config(Config::default(), None);
        let p = the_context.bool_variable("p").unwrap();
        assert!(the_context.add_clause(p).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        let iterations = the_context.counters.iterations;
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.counters.iterations, iterations);
    }
}
