//! Details on the result of some procedure.

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context could not be determined within the time allowed.
    TimeUp,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for self::Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::TimeUp => write!(f, "UNKNOWN"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Information regarding the parse when building the context.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Parser {
    /// The expected variable/clause count based on the header of a DIMACS file.
    Expected(usize, usize),

    /// A count of variables/clauses from parsing a DIMACS file.
    Counts(usize, usize),
}

impl std::fmt::Display for self::Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected(v, c) => write!(f, "Expected:     {v} variables and {c} clauses"),
            Self::Counts(v, c) => write!(f, "Parse result: {v} variables and {c} clauses"),
        }
    }
}
