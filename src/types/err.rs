//! Error types used in the library.
//!
//! - Most of these indicate misuse of the library when building a formula, or a malformed DIMACS file.
//! - Analysis errors are unexpected, and indicate an inconsistency between the trail and a conflict.
//!
//! A [Conflict] is kept apart from [ErrorKind], as a conflict is expected from time to time during a solve and is always resolved within a solve.
//  As with other enums named after the structure they concern, err::{self} is used to prefix the types with `err::`.

use crate::db::ClauseKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    VariableDB(VariableDBError),
    Parse(ParseError),
}

/// A violated clause, found during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Conflict(pub ClauseKey);

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// A clause which is not backtrackable has no literal with a clausal reason to resolve on.
    NoResolutionCandidate,

    /// The top literals of a non-empty clause could not be found.
    EmptyTop,

    /// A literal of the clause has no value.
    UnassignedLiteral,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal over a variable which is not Boolean.
    NonBooleanLiteral,

    /// An atom not known to the context.
    UnknownAtom,

    /// A clause was added after a solve began.
    SolveStarted,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// No clause is stored with the key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VariableDBError {
    /// A variable with the name already exists.
    DuplicateVariable(String),

    /// No variable is stored with the key.
    UnknownVariable,
}

impl From<VariableDBError> for ErrorKind {
    fn from(e: VariableDBError) -> Self {
        ErrorKind::VariableDB(e)
    }
}

/// Errors when parsing a DIMACS file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The problem specification line is malformed.
    ProblemSpecification,

    /// The line could not be read.
    Line(usize),

    /// A literal on the line could not be parsed.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
