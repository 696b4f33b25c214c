/*!
Configuration of a context.

A [Config] is fixed when a [context](crate::context::Context) is built, and read throughout a solve.
Default values are collected in [defaults].

```rust
# use otter_mcsat::config::Config;
# use std::time::Duration;
let config = Config {
    learning: false,
    time_limit: Some(Duration::from_secs(10)),
};
```
*/

use std::time::Duration;

pub mod defaults;

#[derive(Clone, Debug)]
pub struct Config {
    /// Whether clauses derived during conflict analysis are watched.
    ///
    /// If false, a derived clause is stored only as the reason for the assignment which follows a backtrack.
    pub learning: bool,

    /// A limit on the time of a solve, checked once each iteration.
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            learning: defaults::LEARNING,
            time_limit: defaults::TIME_LIMIT,
        }
    }
}
