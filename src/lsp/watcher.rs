//! Settings file watching
//!
//! The parent directory is watched rather than the file itself so that
//! editors replacing the file on save, or creating it later, are seen.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// Events from the settings file watcher
#[derive(Debug)]
pub enum WatcherEvent {
    SettingsChanged(PathBuf),
    WatcherError(notify::Error),
}

/// Start watching `path`; events arrive on the returned channel for as
/// long as the watcher is kept alive
pub fn watch_settings(
    path: &Path,
) -> Result<(RecommendedWatcher, mpsc::UnboundedReceiver<WatcherEvent>)> {
    let (tx, rx) = mpsc::unbounded_channel();

    let file_name: OsString = path
        .file_name()
        .context("Settings path has no file name")?
        .to_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if let EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) =
                    event.kind
                {
                    for path in event.paths {
                        if path.file_name() == Some(file_name.as_os_str()) {
                            let _ = tx.send(WatcherEvent::SettingsChanged(path));
                        }
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(WatcherEvent::WatcherError(e));
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;
    log::debug!("Watching {} for settings changes", path.display());

    Ok((watcher, rx))
}
