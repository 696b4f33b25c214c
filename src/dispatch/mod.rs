/*!
Dispatches for external observers.

Dispatches have two uses:
- Communication after some procedure, e.g. a solve or a parse.
- Optional observation of the dynamics of a context during a solve.

Each dispatch is a small message of some pre-determined type, sent by passing the message to the dispatcher of a context, if a dispatcher was given when the [context](crate::context::Context::from_config) was built.

- [Deltas](crate::dispatch::library::delta), on some change to the trail, to the clause database, or during resolution.
- [Reports](crate::dispatch::library::report), on the result of some procedure.
- [Stats](crate::dispatch::library::stat), regarding a solve.

If no dispatcher is present, the runtime overhead of a dispatch is a check on an optional, and dispatches are sent through [macros] to keep the check out of the way of other code.

# Example

Counting decisions made during a solve.

```rust
# use otter_mcsat::config::Config;
# use otter_mcsat::context::Context;
# use otter_mcsat::dispatch::{Dispatch, library::delta::{self, Delta}};
# use std::{cell::Cell, rc::Rc};
let decisions = Rc::new(Cell::new(0));
let counter = decisions.clone();

let dispatcher = move |dispatch: Dispatch| match dispatch {
    Dispatch::Delta(Delta::Trail(delta::Trail::Decision(_, _))) => counter.set(counter.get() + 1),
    _ => {}
};

let mut the_context = Context::from_config(Config::default(), Some(Box::new(dispatcher)));
let p = the_context.bool_variable("p").unwrap();
let q = the_context.bool_variable("q").unwrap();
assert!(the_context.add_clause(vec![p, q]).is_ok());

assert!(the_context.solve().is_ok());
assert_eq!(decisions.get(), the_context.counters.decisions);
```
*/

pub mod library;
pub(crate) mod macros;

use library::{delta::Delta, report::Parser, report::Report, stat::Stat};

/// Dispatch types.
#[derive(Clone, Debug)]
pub enum Dispatch {
    /// A change during some procedure.
    Delta(Delta),

    /// The result of a solve.
    Report(Report),

    /// Information regarding a parse.
    Parser(Parser),

    /// A statistic regarding a solve.
    Stat(Stat),

    /// No further dispatches will be sent regarding the current solve.
    Finish,
}
