use std::time::Duration;

pub const LEARNING: bool = true;
pub const TIME_LIMIT: Option<Duration> = None;
