//! I/O operations: reading sources, writing outputs, watching for changes.

mod file_cache;
mod output;
mod watcher;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
pub use output::{OutputSink, WriteOutcome};
pub use watcher::{TargetWatcher, WatchSet};
