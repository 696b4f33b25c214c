/*!
Analysis of a violated clause.

Takes a key to a clause which is violated on the current valuation and returns either a backtrackable clause or the empty clause.

# Top literals

The top literals of a clause are those literals whose atoms were assigned at the greatest level of any atom of the clause.
A clause is *backtrackable* if either:
- There is exactly one top literal, at a level above zero, in which case the clause is a unique implication point (UIP).
- Every top literal was assigned by [semantic evaluation](crate::db::trail::Reason::SemanticEvaluation), at a level above zero, in which case the clause is a semantic split.

# Resolution

Until the clause is backtrackable or empty, the clause is resolved with the reason of a literal assigned by clausal propagation.
The literal chosen is the most recently assigned of those at the greatest level, and so resolution stops at the first UIP.

If the clause has no literal assigned by clausal propagation:
- If every literal was assigned at level zero, the conflict does not depend on any decision and the clause is resolved to the empty clause.
- Otherwise, an [error](err::AnalysisError::NoResolutionCandidate) is returned.

# Example

```rust,ignore
let analysed = self.analyse_conflict(key)?;
match analysed.is_empty() {
    true => unsatisfiable,
    false => backtrack with the analysed clause,
}
```
*/

use crate::{
    context::Context,
    db::{trail::Reason, ClauseKey, LevelIndex},
    dispatch::{
        library::delta::{self, Delta},
        macros::dispatch_delta,
        Dispatch,
    },
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err::{self, ErrorKind},
};

/// The top literals of a clause, together with their level.
pub struct TopLiterals {
    pub level: LevelIndex,
    pub literals: Vec<Literal>,
}

impl Context {
    /// The top literals of a non-empty clause, each of which must have a value.
    pub fn top_literals(&self, clause: &Clause) -> Result<TopLiterals, ErrorKind> {
        let mut top = TopLiterals {
            level: 0,
            literals: Vec::default(),
        };

        for literal in clause.iter() {
            let Some(level) = self.trail.level_of(literal.atom()) else {
                log::error!(target: targets::ANALYSIS, "Literal without a value: {literal}");
                return Err(err::AnalysisError::UnassignedLiteral.into());
            };
            if level > top.level || top.literals.is_empty() {
                top.level = level;
                top.literals.clear();
                top.literals.push(*literal);
            } else if level == top.level {
                top.literals.push(*literal);
            }
        }

        match top.literals.is_empty() {
            true => Err(err::AnalysisError::EmptyTop.into()),
            false => Ok(top),
        }
    }

    /// Whether the top literals are those of a UIP or a semantic split clause.
    pub fn is_backtrackable(&self, top: &TopLiterals) -> bool {
        if top.level == 0 {
            return false;
        }
        top.literals.len() == 1
            || top.literals.iter().all(|literal| {
                self.trail.reason_of(literal.atom()) == Some(Reason::SemanticEvaluation)
            })
    }

    /// Applies resolution to the clause, until the clause is backtrackable or empty.
    ///
    /// For details, see [procedures::analysis](crate::procedures::analysis).
    pub fn analyse_conflict(&self, key: ClauseKey) -> Result<Clause, ErrorKind> {
        dispatch_delta!(self, Delta::Resolution(delta::Resolution::Begin(key)));
        let mut clause = self.clause_db.get(key)?.clone();

        loop {
            if clause.is_empty() {
                log::info!(target: targets::ANALYSIS, "Resolved to the empty clause");
                break;
            }

            let top = self.top_literals(&clause)?;
            if self.is_backtrackable(&top) {
                break;
            }

            let pivot = clause
                .iter()
                .filter_map(|literal| {
                    let entry = self.trail.entry(literal.atom())?;
                    match entry.reason {
                        Reason::ClausalPropagation(reason) => {
                            Some(((entry.level, entry.position), *literal, reason))
                        }
                        _ => None,
                    }
                })
                .max_by_key(|(order, _, _)| *order);

            match pivot {
                Some((_, literal, reason)) => {
                    let reason_clause = self.clause_db.get(reason)?;
                    log::trace!(target: targets::ANALYSIS, "Resolving {clause} with {reason_clause} on {literal}");
                    clause = clause.resolve(reason_clause, literal);
                    dispatch_delta!(self, Delta::Resolution(delta::Resolution::Used(reason)));
                }

                None if top.level == 0 => {
                    log::info!(target: targets::ANALYSIS, "Conflict without a decision: {clause}");
                    clause = Clause::default();
                }

                None => {
                    log::error!(target: targets::ANALYSIS, "No literal of {clause} to resolve on");
                    return Err(err::AnalysisError::NoResolutionCandidate.into());
                }
            }
        }

        dispatch_delta!(self, Delta::Resolution(delta::Resolution::End));
        Ok(clause)
    }
}
