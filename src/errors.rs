//! Error types for tangling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tangle operations.
#[derive(Error, Debug)]
pub enum TangleError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid regex filter: {0}")]
    Regex(#[from] regex::Error),

    #[error("the order specifies the name {0}, but there's no block with that name")]
    UnknownBlockName(String),

    #[error("two targets have the same outfile, {0}")]
    DuplicateOutfile(String),

    #[error("target {0} doesn't have any 'sources' specified")]
    NoSources(usize),

    #[error("watch error: {0}")]
    Watch(String),

    #[error("target task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<notify::Error> for TangleError {
    fn from(err: notify::Error) -> Self {
        TangleError::Watch(err.to_string())
    }
}

/// Result type alias for tangle operations.
pub type Result<T> = std::result::Result<T, TangleError>;
