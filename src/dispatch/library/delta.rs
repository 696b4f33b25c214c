/*!
Details on some change during a procedure or to an interal structure.
*/
use crate::{
    db::{ClauseKey, LevelIndex},
    procedures::backtrack::BacktrackKind,
    structures::{atom::Atom, literal::Literal, value::Value},
};

/// High level distinction of changes, by 'location' of the change.
#[derive(Clone, Debug)]
pub enum Delta {
    /// On the trail.
    Trail(self::Trail),

    /// During resolution.
    Resolution(self::Resolution),

    /// Within the [clause database](crate::db::clause).
    ClauseDB(self::ClauseDB),
}

/// Changes to the trail.
#[derive(Clone, Debug)]
pub enum Trail {
    /// The atom was decided to have the value.
    Decision(Atom, Value),

    /// The literal was set as the clause was unit.
    ClausalPropagation(Literal, ClauseKey),

    /// The atom was given the value on evaluation or propagation of a theory atom.
    SemanticEvaluation(Atom, Value),

    /// Each level above `to` was cleared.
    Backtrack {
        from: LevelIndex,
        to: LevelIndex,
        kind: BacktrackKind,
    },
}

/// Changes during resolution.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// Resolution begins from the detailed conflict…
    Begin(ClauseKey),

    /// The detailed clause was used…
    Used(ClauseKey),

    /// … resolution has concluded.
    End,
}

/// Changes to the clause database.
#[derive(Clone, Debug)]
pub enum ClauseDB {
    /// An original clause was added.
    Original(ClauseKey),

    /// A clause derived by resolution was stored, and will be watched if learning is enabled.
    Derived(ClauseKey),

    /// A clause derived by resolution is watched.
    Learned(ClauseKey),

    /// A clause was added by a theory atom.
    Lemma(ClauseKey),
}
