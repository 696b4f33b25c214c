//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backtrack clears every assignment above some target level, and then makes an assignment from an analysed clause, so the clause is no longer violated.
//!
//! The target level and the assignment made depend on the [kind](BacktrackKind) of the clause:
//!
//! - If the clause is a UIP, the target level is the greatest level of the clause other than that of the single top literal, or zero if there is no such level.
//!   After the backtrack, the top literal is the only literal of the clause without a value, and the literal is set by clausal propagation at the target level.
//! - If the clause is a semantic split, the target level is one below the level of the top literals.
//!   After the backtrack, the atom of the first literal without a value is decided with the polarity of the literal, at a fresh level.
//!
//! # Soundness
//!
//! Backtracking is only sound for a clause which is backtrackable on the current valuation, as determined through [analysis](crate::procedures::analysis).
//! Backtracking with any other clause is an error in the library, and so leads to a panic.

use crate::{
    context::Context,
    db::{trail::Reason, ClauseKey, LevelIndex},
    dispatch::{
        library::delta::{self, Delta},
        macros::dispatch_delta,
        Dispatch,
    },
    misc::log::targets::{self},
    structures::{clause::Clause, value::Value},
    types::err::{self},
};

/// The kind of a backtrackable clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BacktrackKind {
    /// The clause has a single top literal.
    UIP,

    /// The top literals of the clause were each assigned by semantic evaluation.
    SemanticSplit,
}

impl Context {
    /// The target level and kind of a backtrack with the clause.
    ///
    /// # Panics
    /// If the clause is empty, or is neither a UIP nor a semantic split.
    pub fn backtrack_level_kind(
        &self,
        clause: &Clause,
    ) -> Result<(LevelIndex, BacktrackKind), err::ErrorKind> {
        if clause.is_empty() {
            panic!("! Attempted search for a backtrack level on an empty clause");
        }
        let top = self.top_literals(clause)?;

        if top.literals.len() == 1 {
            let mut target = 0;
            for literal in clause.iter() {
                if top.literals.contains(literal) {
                    continue;
                }
                if let Some(level) = self.trail.level_of(literal.atom()) {
                    target = std::cmp::max(target, level);
                }
            }
            Ok((target, BacktrackKind::UIP))
        } else {
            let semantic_split = top.level > 0
                && top.literals.iter().all(|literal| {
                    self.trail.reason_of(literal.atom()) == Some(Reason::SemanticEvaluation)
                });
            if !semantic_split {
                panic!("! Backtrack with {clause}, which is neither a UIP nor a semantic split");
            }
            Ok((top.level - 1, BacktrackKind::SemanticSplit))
        }
    }

    /// Clears every level above `target`.
    ///
    /// Nothing happens if `target` is at or above the current level.
    pub fn backtrack(&mut self, target: LevelIndex) {
        let from = self.trail.level();
        if target >= from {
            return;
        }
        let cleared = self.unset_atoms(target);
        log::trace!(target: targets::BACKTRACK, "Backtrack from {from} to {target}, clearing {cleared} assignments");
    }

    /// Backtracks with a stored clause, and makes an assignment from the clause.
    ///
    /// For details, see [procedures::backtrack](crate::procedures::backtrack).
    ///
    /// # Panics
    /// If, on a UIP, the backtrack does not leave exactly one literal of the clause without a value.
    pub fn backtrack_with(&mut self, key: ClauseKey) -> Result<BacktrackKind, err::ErrorKind> {
        let clause = self.clause_db.get(key)?.clone();
        let (target, kind) = self.backtrack_level_kind(&clause)?;

        let from = self.trail.level();
        self.backtrack(target);
        dispatch_delta!(
            self,
            Delta::Trail(delta::Trail::Backtrack {
                from,
                to: target,
                kind,
            })
        );

        let mut unvalued = clause
            .iter()
            .filter(|literal| self.trail.entry(literal.atom()).is_none());

        match kind {
            BacktrackKind::UIP => {
                let asserted = unvalued.next().copied();
                let remaining = unvalued.count();
                let Some(literal) = asserted.filter(|_| remaining == 0) else {
                    panic!("! Backtrack with {clause} did not leave a single literal without a value");
                };

                log::trace!(target: targets::BACKTRACK, "UIP {clause} asserts {literal} at {target}");
                // The literal has no value, so there is no conflict.
                if let Err(conflict) = self.clausal_propagate(key, literal) {
                    panic!("! Conflict {conflict:?} on an asserted literal without a value");
                }
            }

            BacktrackKind::SemanticSplit => {
                let Some(literal) = unvalued.next().copied() else {
                    panic!("! Semantic split with {clause} left no literal without a value");
                };
                log::trace!(target: targets::BACKTRACK, "Semantic split {clause} decides {literal}");
                self.decide(literal.atom(), Value::Bool(literal.polarity()));
            }
        }

        Ok(kind)
    }
}
