//! A configured target, ready to be tangled and written.

use crate::config::Target;
use crate::errors::Result;
use crate::io::{FileCache, OutputSink, RealFileCache, WriteOutcome};
use crate::model::Tangler;

/// A target together with its compiled tangler and output sink.
#[derive(Debug, Clone)]
pub struct TargetJob {
    target: Target,
    tangler: Tangler,
    sink: OutputSink,
}

impl TargetJob {
    /// Compiles the target's filters and order.
    ///
    /// Fails on an invalid regex, before any source is read.
    pub fn new(target: Target) -> Result<Self> {
        let tangler = Tangler::from_config(target.tangler_config())?;
        let sink = target.sink();
        Ok(Self {
            target,
            tangler,
            sink,
        })
    }

    /// Returns the target this job was built from.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns where the output goes.
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Tangles the sources from disk and writes the result.
    pub fn run(&self) -> Result<WriteOutcome> {
        self.run_with(&RealFileCache)
    }

    /// Tangles the sources read through `files` and writes the result.
    ///
    /// Nothing is written if tangling fails.
    pub fn run_with<F: FileCache + ?Sized>(&self, files: &F) -> Result<WriteOutcome> {
        let output = self.tangler.tangle_with(files, self.target.sources())?;
        let outcome = self.sink.write(&output)?;

        match outcome {
            WriteOutcome::Written => tracing::info!("Generated {}", self.sink),
            WriteOutcome::Unchanged => tracing::debug!("{} is up to date", self.sink),
        }
        Ok(outcome)
    }
}
