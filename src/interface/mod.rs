//! High-level interface for running targets.

mod target_job;

pub use target_job::TargetJob;
