//! Configuration loading and validation.

mod config_data;
mod validation;

use std::fs;
use std::path::Path;

pub use config_data::{Config, FilterConfig, Target};
pub use validation::{validate_at_least_one_source, validate_config, validate_unique_target_outfiles};

use crate::errors::{Result, TangleError};

/// Configuration file read when no source file is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = ".tangle.json";

/// Reads configuration from a JSON file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| TangleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&content)?;
    tracing::debug!(
        "Loaded {} targets from {}",
        config.targets.len(),
        path.display()
    );
    Ok(config)
}
