//! Statistics regarding a solve.
use std::time::Duration;

/// Dispatches containing statistics.
#[derive(Clone, Debug)]
pub enum Stat {
    /// The count of variables in the formula.
    Variables(usize),

    /// The count of original clauses in the formula.
    OriginalClauses(usize),

    /// The count of iterations made.
    Iterations(usize),

    /// The count of decisions made.
    Decisions(usize),

    /// The count of conflicts seen.
    Conflicts(usize),

    /// The count of clausal propagations made.
    ClausalPropagations(usize),

    /// The count of assignments made by theory atoms.
    SemanticPropagations(usize),

    /// The count of theory atoms given a value by evaluation.
    SemanticEvaluations(usize),

    /// The count of clauses learned.
    Learned(usize),

    /// The time elapsed.
    Time(Duration),
}
