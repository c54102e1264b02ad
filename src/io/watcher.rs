//! File watching for re-tangling on change.
//!
//! Editors such as vim save by writing a copy and renaming it over the
//! original, which detaches a watch placed on the file itself. The watcher
//! therefore watches each source's parent directory and matches events back
//! to the source file names.

use std::collections::{BTreeSet, HashSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::errors::Result;

/// The set of source files a target depends on, keyed by directory and file name.
#[derive(Debug, Clone, Default)]
pub struct WatchSet {
    files: HashSet<(PathBuf, OsString)>,
    dirs: BTreeSet<PathBuf>,
}

impl WatchSet {
    /// Builds the set for the given source paths.
    pub fn new<P: AsRef<Path>>(sources: &[P]) -> Self {
        let mut set = Self::default();
        for source in sources {
            if let Some((dir, name)) = split_path(source.as_ref()) {
                set.dirs.insert(dir.clone());
                set.files.insert((dir, name));
            }
        }
        set
    }

    /// Returns true if the path refers to one of the sources.
    pub fn contains(&self, path: &Path) -> bool {
        split_path(path)
            .map(|key| self.files.contains(&key))
            .unwrap_or(false)
    }

    /// Returns the directories that need watching.
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }
}

fn split_path(path: &Path) -> Option<(PathBuf, OsString)> {
    let name = path.file_name()?.to_os_string();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf());
    Some((dir, name))
}

/// Access events are ignored so that reading a source never retriggers a tangle.
fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Watches one target's sources and yields coalesced change triggers.
///
/// The trigger channel holds at most one pending notification; anything that
/// arrives while one is pending is folded into it.
pub struct TargetWatcher {
    _watcher: RecommendedWatcher,
    triggers: mpsc::Receiver<()>,
}

impl TargetWatcher {
    /// Starts watching the given sources.
    ///
    /// One trigger is queued immediately so the target is tangled once at startup.
    pub fn new<P: AsRef<Path>>(sources: &[P]) -> Result<Self> {
        let set = WatchSet::new(sources);
        let dirs: Vec<PathBuf> = set.dirs().map(Path::to_path_buf).collect();

        let (tx, rx) = mpsc::channel(1);
        let _ = tx.try_send(());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_relevant(&event.kind) && event.paths.iter().any(|p| set.contains(p)) {
                    tracing::debug!("Change detected: {:?}", event.paths);
                    let _ = tx.try_send(());
                }
            }
            Err(e) => tracing::warn!("Watch error: {}", e),
        })?;

        for dir in &dirs {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching directory {}", dir.display());
        }

        Ok(Self {
            _watcher: watcher,
            triggers: rx,
        })
    }

    /// Waits for the next trigger.
    ///
    /// After a trigger arrives, waits `debounce` and absorbs a trigger that
    /// came in meanwhile. Returns `None` if the watcher has shut down.
    pub async fn next_trigger(&mut self, debounce: Duration) -> Option<()> {
        self.triggers.recv().await?;
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
            let _ = self.triggers.try_recv();
        }
        Some(())
    }
}
