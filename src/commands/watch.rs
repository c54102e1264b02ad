//! Watch command implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use super::helpers::{join_targets, prepare_targets};
use crate::config::{Config, Target};
use crate::errors::Result;
use crate::interface::TargetJob;
use crate::io::TargetWatcher;

/// Options for the watch command.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Directory that relative source and output paths are resolved against.
    pub base_dir: Option<PathBuf>,
    /// Debounce delay in milliseconds.
    pub debounce_ms: u64,
}

/// Tangles every target, then re-tangles a target whenever one of its sources changes.
///
/// Each target has its own watcher and runs at most one tangle at a time.
/// Every target's tangler and watcher are set up before any of them runs, so
/// a bad filter or an unwatchable source fails the whole command up front.
/// A failed re-tangle is logged and the target keeps watching.
pub async fn watch(config: &Config, options: WatchOptions) -> Result<()> {
    let targets = prepare_targets(config, options.base_dir.as_deref())?;
    let debounce = Duration::from_millis(options.debounce_ms);

    let watched = targets
        .into_iter()
        .map(watch_setup)
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Watching for changes (debounce: {}ms)...", options.debounce_ms);

    let mut join_set = JoinSet::new();
    for (job, watcher) in watched {
        join_set.spawn(watch_target(job, watcher, debounce));
    }

    join_targets(join_set).await
}

fn watch_setup(target: Target) -> Result<(Arc<TargetJob>, TargetWatcher)> {
    let job = TargetJob::new(target)?;
    let watcher = TargetWatcher::new(job.target().sources())?;
    Ok((Arc::new(job), watcher))
}

async fn watch_target(
    job: Arc<TargetJob>,
    mut watcher: TargetWatcher,
    debounce: Duration,
) -> Result<()> {
    while watcher.next_trigger(debounce).await.is_some() {
        tracing::info!("Generating {}", job.sink());

        let run = Arc::clone(&job);
        match tokio::task::spawn_blocking(move || run.run()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::error!("Failed to generate {}: {}", job.sink(), e),
            Err(e) => tracing::error!("Tangle task for {} failed: {}", job.sink(), e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use crate::errors::TangleError;
    use std::fs;
    use tempfile::tempdir;

    async fn wait_for_content(path: &std::path::Path, expected: &str) -> bool {
        for _ in 0..60 {
            if fs::read_to_string(path).map(|c| c == expected).unwrap_or(false) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_watch_target_initial_and_change() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("doc.md");
        let outfile = dir.path().join("out.py");
        fs::write(&source, "```py\nprint('one')\n```\n").unwrap();

        let target = Target {
            outfile: Some(outfile.clone()),
            sources: vec![source.clone()],
            ..Default::default()
        };
        let (job, watcher) = watch_setup(target).unwrap();
        let handle = tokio::spawn(watch_target(job, watcher, Duration::from_millis(10)));

        assert!(wait_for_content(&outfile, "print('one')").await);

        fs::write(&source, "```py\nprint('two')\n```\n").unwrap();
        assert!(wait_for_content(&outfile, "print('two')").await);

        handle.abort();
    }

    #[tokio::test]
    async fn test_watch_survives_failed_tangle() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("doc.md");
        let outfile = dir.path().join("out.py");
        fs::write(&source, "```py a\nprint('a')\n```\n").unwrap();

        let target = Target {
            outfile: Some(outfile.clone()),
            sources: vec![source.clone()],
            filters: None,
            order: Some(vec!["a".to_string(), "b".to_string()]),
        };
        let (job, watcher) = watch_setup(target).unwrap();
        let handle = tokio::spawn(watch_target(job, watcher, Duration::from_millis(10)));

        // Block "b" is missing, so the initial run fails without output.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!outfile.exists());
        assert!(!handle.is_finished());

        fs::write(&source, "```py a\nprint('a')\n```\n\n```py b\nprint('b')\n```\n").unwrap();
        assert!(wait_for_content(&outfile, "print('a')\n\nprint('b')").await);

        handle.abort();
    }

    #[tokio::test]
    async fn test_watch_invalid_regex_fails_before_any_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("doc.md"), "```py\nprint('ok')\n```\n").unwrap();

        let bad = Target {
            outfile: Some(PathBuf::from("bad.py")),
            sources: vec![PathBuf::from("doc.md")],
            filters: Some(FilterConfig {
                language: None,
                regex: Some("(".to_string()),
            }),
            order: None,
        };
        let good = Target {
            outfile: Some(PathBuf::from("good.py")),
            sources: vec![PathBuf::from("doc.md")],
            ..Default::default()
        };
        let config = Config {
            targets: vec![bad, good],
        };
        let options = WatchOptions {
            base_dir: Some(dir.path().to_path_buf()),
            debounce_ms: 10,
        };

        let result = tokio::time::timeout(Duration::from_secs(2), watch(&config, options))
            .await
            .expect("watch should return the setup error");

        assert!(matches!(result, Err(TangleError::Regex(_))));
        assert!(!dir.path().join("good.py").exists());
        assert!(!dir.path().join("bad.py").exists());
    }

    #[tokio::test]
    async fn test_watch_rejects_invalid_config() {
        let target = Target {
            outfile: Some(PathBuf::from("a.js")),
            sources: vec![PathBuf::from("a.md")],
            ..Default::default()
        };
        let config = Config {
            targets: vec![target.clone(), target],
        };

        let result = watch(&config, WatchOptions::default()).await;

        assert!(matches!(result, Err(TangleError::DuplicateOutfile(_))));
    }
}
