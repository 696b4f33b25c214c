/*!
Databases for holding information relevant to a solve.

- [The variable database](crate::db::variable) stores variables, their values, the order in which variables are decided, and the watches used for semantic propagation.
- [The clause database](crate::db::clause) stores clauses, and watches literals to identify unit and violated clauses.
- [The trail](crate::db::trail) records the level and reason of each assignment.

Both the variable and clause databases are built on [watches], a generic engine for incrementally summing the values of groups of members.

Databases are accessed through keys:
- Variables through a [VariableKey], an index fixed when the variable is added.
- Theory atoms through a [TheoryKey], likewise an index.
- Clauses through a [ClauseKey], as issued by a [slotmap].
*/

pub mod clause;
pub mod trail;
pub mod variable;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;

/// The key of a variable, an index into the variable database.
pub type VariableKey = u32;

/// The key of a theory atom, an index into the theory atoms of a context.
pub type TheoryKey = u32;

slotmap::new_key_type! {
    /// The key of a clause in the clause database.
    pub struct ClauseKey;
}
