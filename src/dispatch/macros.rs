/*!
Macros for sending dispatches from a context.

Each macro expects `Dispatch` to be in scope, and the details of a dispatch are only built if a dispatcher is present.
*/

/// Sends a delta, if a dispatcher is present.
macro_rules! dispatch_delta {
    ($self:ident, $delta:expr) => {
        if let Some(dispatcher) = &$self.dispatcher {
            dispatcher(Dispatch::Delta($delta));
        }
    };
}
pub(crate) use dispatch_delta;

/// Sends the counts of a solve, if a dispatcher is present.
macro_rules! dispatch_stats {
    ($self:ident) => {
        if let Some(dispatcher) = &$self.dispatcher {
            use crate::dispatch::library::stat::Stat;
            dispatcher(Dispatch::Stat(Stat::Variables($self.counters.variables)));
            dispatcher(Dispatch::Stat(Stat::OriginalClauses(
                $self.counters.original_clauses,
            )));
            dispatcher(Dispatch::Stat(Stat::Iterations($self.counters.iterations)));
            dispatcher(Dispatch::Stat(Stat::Decisions($self.counters.decisions)));
            dispatcher(Dispatch::Stat(Stat::Conflicts($self.counters.conflicts)));
            dispatcher(Dispatch::Stat(Stat::ClausalPropagations(
                $self.counters.clausal_propagations,
            )));
            dispatcher(Dispatch::Stat(Stat::SemanticPropagations(
                $self.counters.semantic_propagations,
            )));
            dispatcher(Dispatch::Stat(Stat::SemanticEvaluations(
                $self.counters.semantic_evaluations,
            )));
            dispatcher(Dispatch::Stat(Stat::Learned($self.counters.learned_clauses)));
            dispatcher(Dispatch::Stat(Stat::Time($self.counters.time)));
        }
    };
}
pub(crate) use dispatch_stats;
