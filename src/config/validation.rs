//! Checks that run on a configuration before any target is tangled.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use super::config_data::Config;
use crate::errors::{Result, TangleError};
use crate::io::OutputSink;

type ConfigValidator = fn(&Config) -> Result<()>;

/// Runs every validator, stopping at the first failure.
pub fn validate_config(config: &Config) -> Result<()> {
    let validators: [ConfigValidator; 2] =
        [validate_unique_target_outfiles, validate_at_least_one_source];

    for validator in validators {
        validator(config)?;
    }
    Ok(())
}

/// Two targets writing to the same place would race; stdout counts as one place.
///
/// Outfiles are compared after lexical normalisation, so `out.js` and
/// `./out.js` collide.
pub fn validate_unique_target_outfiles(config: &Config) -> Result<()> {
    let mut sinks = HashSet::new();
    for target in &config.targets {
        let sink = target.sink();
        if !sinks.insert(normalize_sink(&sink)) {
            return Err(TangleError::DuplicateOutfile(sink.to_string()));
        }
    }
    Ok(())
}

fn normalize_sink(sink: &OutputSink) -> OutputSink {
    match sink {
        OutputSink::Stdout => OutputSink::Stdout,
        OutputSink::File(path) => OutputSink::File(normalize_path(path)),
    }
}

/// Drops `.` components and folds `..` into a preceding name, without
/// touching the file system.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) =>
            {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Every target must name at least one source.
pub fn validate_at_least_one_source(config: &Config) -> Result<()> {
    for (i, target) in config.targets.iter().enumerate() {
        if target.sources.is_empty() {
            return Err(TangleError::NoSources(i));
        }
    }
    Ok(())
}
