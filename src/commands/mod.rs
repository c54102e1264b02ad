//! Command implementations.

mod helpers;
pub mod tangle;
pub mod watch;

pub use tangle::{tangle, TangleOptions};
pub use watch::{watch, WatchOptions};
