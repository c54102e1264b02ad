//! Destinations for tangled output.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{Result, TangleError};

/// Counter for unique temp file names.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Where a target's tangled output goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputSink {
    /// Standard output.
    Stdout,
    /// A file, replaced atomically on each write.
    File(PathBuf),
}

/// What a write actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The content was written.
    Written,
    /// The file already held exactly this content.
    Unchanged,
}

impl OutputSink {
    /// Picks the sink for an optional outfile; `None` or an empty path means stdout.
    pub fn from_outfile(outfile: Option<&Path>) -> Self {
        match outfile {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path.to_path_buf()),
            _ => Self::Stdout,
        }
    }

    /// Writes the tangled content to this sink.
    pub fn write(&self, content: &str) -> Result<WriteOutcome> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(WriteOutcome::Written)
            }
            Self::File(path) => write_file(path, content).map_err(|source| TangleError::Write {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<WriteOutcome> {
    if let Ok(existing) = fs::read(path) {
        if existing == content.as_bytes() {
            return Ok(WriteOutcome::Unchanged);
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    atomic_write(path, content)?;
    Ok(WriteOutcome::Written)
}

/// Writes content via a temp file in the same directory, then renames it
/// over the target.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let temp_path = parent.join(format!(
        ".tangle-tmp-{}-{}",
        std::process::id(),
        counter,
    ));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
