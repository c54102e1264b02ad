//! Tangle command implementation.

use std::path::PathBuf;

use tokio::task::JoinSet;

use super::helpers::{join_targets, prepare_targets};
use crate::config::Config;
use crate::errors::Result;
use crate::interface::TargetJob;

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Directory that relative source and output paths are resolved against.
    pub base_dir: Option<PathBuf>,
}

/// Tangles every target once, concurrently.
///
/// The configuration is validated before any target starts. A failing
/// target does not stop its siblings; the first failure is returned once
/// all targets have finished.
pub async fn tangle(config: &Config, options: TangleOptions) -> Result<()> {
    let targets = prepare_targets(config, options.base_dir.as_deref())?;
    tracing::debug!("Tangling {} targets", targets.len());

    let mut join_set = JoinSet::new();
    for target in targets {
        join_set.spawn_blocking(move || -> Result<()> {
            TargetJob::new(target)?.run()?;
            Ok(())
        });
    }

    join_targets(join_set).await
}
