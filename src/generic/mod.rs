//! Generic structures, not tied to any particular part of a solve.

pub mod priority_queue;
