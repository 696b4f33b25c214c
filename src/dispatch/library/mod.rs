//! The types of dispatch.

pub mod delta;
pub mod report;
pub mod stat;
