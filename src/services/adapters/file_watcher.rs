use crate::services::bus::RefreshSender;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

const WATCHER_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct WatchError {
    pub path: PathBuf,
    pub source: notify::Error,
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to watch {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for WatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Recursive watch over one workspace root. Every create/change/delete
/// event becomes one refresh signal; dropping the watcher unsubscribes.
pub struct WorkspaceWatcher {
    watcher: RecommendedWatcher,
    root: PathBuf,
}

impl WorkspaceWatcher {
    pub fn start(root: &Path, refresh: RefreshSender) -> Result<Self, WatchError> {
        let root = root.to_path_buf();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    if triggers_refresh(&event.kind) {
                        let _ = refresh.send();
                    }
                }
                Err(e) => tracing::warn!(error = %e, "file watcher error"),
            },
            Config::default().with_poll_interval(WATCHER_POLL_INTERVAL),
        )
        .map_err(|source| WatchError {
            path: root.clone(),
            source,
        })?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|source| WatchError {
                path: root.clone(),
                source,
            })?;

        tracing::info!(root = %root.display(), "watching workspace");
        Ok(Self { watcher, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Explicit teardown; same as dropping.
    pub fn stop(mut self) {
        if let Err(e) = self.watcher.unwatch(&self.root) {
            tracing::debug!(root = %self.root.display(), error = %e, "unwatch failed");
        }
        tracing::info!(root = %self.root.display(), "stopped watching workspace");
    }
}

/// No event-type discrimination beyond "something was created, changed or removed".
pub fn triggers_refresh(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    )
}
