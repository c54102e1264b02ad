//! Shared command helpers.

use std::path::Path;

use tokio::task::JoinSet;

use crate::config::{validate_config, Config, Target};
use crate::errors::{Result, TangleError};

/// Resolves the targets against `base_dir` and validates the result.
pub fn prepare_targets(config: &Config, base_dir: Option<&Path>) -> Result<Vec<Target>> {
    let resolved = Config {
        targets: config
            .targets
            .iter()
            .map(|target| match base_dir {
                Some(dir) => target.resolved(dir),
                None => target.clone(),
            })
            .collect(),
    };
    validate_config(&resolved)?;
    Ok(resolved.targets)
}

/// Waits for every target task to finish.
///
/// Running tasks are never cancelled. Every failure is logged as it
/// arrives, and the first one is returned.
pub async fn join_targets(mut join_set: JoinSet<Result<()>>) -> Result<()> {
    let mut first_error: Option<TangleError> = None;

    while let Some(joined) = join_set.join_next().await {
        let result = joined.map_err(TangleError::from).and_then(|result| result);

        if let Err(e) = result {
            tracing::error!("{}", e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_prepare_targets_resolves_paths() {
        let config = Config::single_source("doc.md", Some(PathBuf::from("out.js")));

        let targets = prepare_targets(&config, Some(Path::new("/work"))).unwrap();

        assert_eq!(targets[0].sources, vec![PathBuf::from("/work/doc.md")]);
        assert_eq!(targets[0].outfile, Some(PathBuf::from("/work/out.js")));
    }

    #[test]
    fn test_prepare_targets_validates() {
        let mut config = Config::single_source("a.md", Some(PathBuf::from("out.js")));
        config.targets.push(config.targets[0].clone());

        assert!(matches!(
            prepare_targets(&config, None),
            Err(TangleError::DuplicateOutfile(_))
        ));
    }

    #[test]
    fn test_prepare_targets_detects_duplicates_after_resolution() {
        let mut config = Config::single_source("a.md", Some(PathBuf::from("out.js")));
        config.targets.push(Target {
            outfile: Some(PathBuf::from("/work/./out.js")),
            sources: vec![PathBuf::from("b.md")],
            ..Default::default()
        });

        assert!(prepare_targets(&config, None).is_ok());
        assert!(matches!(
            prepare_targets(&config, Some(Path::new("/work"))),
            Err(TangleError::DuplicateOutfile(_))
        ));
    }

    #[tokio::test]
    async fn test_join_targets_waits_for_all() {
        let finished = Arc::new(AtomicUsize::new(0));
        let mut join_set = JoinSet::new();

        join_set.spawn(async { Err(TangleError::UnknownBlockName("first".to_string())) });
        for _ in 0..3 {
            let finished = Arc::clone(&finished);
            join_set.spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }

        let result = join_targets(join_set).await;

        assert!(matches!(result, Err(TangleError::UnknownBlockName(ref m)) if m == "first"));
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_join_targets_panicked_task() {
        let mut join_set = JoinSet::new();
        join_set.spawn(async { panic!("target crashed") });

        assert!(matches!(join_targets(join_set).await, Err(TangleError::Join(_))));
    }

    #[tokio::test]
    async fn test_join_targets_ok() {
        let mut join_set = JoinSet::new();
        join_set.spawn(async { Ok(()) });

        assert!(join_targets(join_set).await.is_ok());
    }
}
