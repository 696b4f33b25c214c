use std::time::Duration;

/// Counts for various things which count.
///
/// Counts are instrumentation only, and are not read during a solve.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of variables added to the context.
    pub variables: usize,

    /// A count of clauses added while building the formula.
    pub original_clauses: usize,

    /// A count of clauses learned, and so watched, through conflict analysis.
    pub learned_clauses: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// A count of clausal propagations, including those of literals with the propagated value already.
    pub clausal_propagations: usize,

    /// A count of assignments made by theory atoms on propagation.
    pub semantic_propagations: usize,

    /// A count of theory atoms evaluated.
    pub semantic_evaluations: usize,

    /// The total number of iterations through a solve.
    pub iterations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            variables: 0,
            original_clauses: 0,
            learned_clauses: 0,

            decisions: 0,
            conflicts: 0,
            clausal_propagations: 0,
            semantic_propagations: 0,
            semantic_evaluations: 0,

            iterations: 0,
            time: Duration::from_secs(0),
        }
    }
}
