//! Configuration data structures.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::OutputSink;
use crate::model::TanglerConfig;

/// Top-level configuration: a list of independent targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tangling jobs, each producing one output.
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl Config {
    /// Builds a one-target configuration for a single source file.
    pub fn single_source(source: impl Into<PathBuf>, outfile: Option<PathBuf>) -> Self {
        Self {
            targets: vec![Target {
                outfile,
                sources: vec![source.into()],
                filters: None,
                order: None,
            }],
        }
    }
}

/// One tangling job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Output file; stdout when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfile: Option<PathBuf>,

    /// Markdown sources, read in this order.
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Block filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterConfig>,

    /// Explicit block order by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

impl Target {
    /// Returns where this target's output goes.
    pub fn sink(&self) -> OutputSink {
        OutputSink::from_outfile(self.outfile.as_deref())
    }

    /// Returns the tangler options for this target.
    pub fn tangler_config(&self) -> TanglerConfig {
        let filters = self.filters.clone().unwrap_or_default();
        TanglerConfig {
            language: filters.language,
            regex: filters.regex,
            order: self.order.clone(),
        }
    }

    /// Returns the source paths.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Resolves relative outfile and source paths against `base_dir`.
    pub fn resolved(&self, base_dir: &Path) -> Self {
        let resolve = |p: &PathBuf| {
            if p.is_absolute() || p.as_os_str().is_empty() {
                p.clone()
            } else {
                base_dir.join(p)
            }
        };
        Self {
            outfile: self.outfile.as_ref().map(resolve),
            sources: self.sources.iter().map(resolve).collect(),
            filters: self.filters.clone(),
            order: self.order.clone(),
        }
    }
}

/// Per-target block filters. Empty strings disable a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep only blocks with this language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Keep only blocks whose code matches this regex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}
