use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Reports created or modified `.json` documents in a data folder.
pub struct ConfigWatcher {
    rx: Receiver<PathBuf>,
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Returns `None` if the directory doesn't exist or the watcher fails to start.
    pub fn start(data_dir: &Path) -> Option<Self> {
        if !data_dir.is_dir() {
            log::info!("config watcher: {data_dir:?} not found, skipping");
            return None;
        }

        let (tx, rx) = mpsc::channel();

        let mut watcher =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => {
                        log::warn!("config watcher error: {e}");
                        return;
                    }
                };

                if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                    return;
                }

                for path in event.paths {
                    if is_config_document(&path) {
                        log::info!("config watcher: detected change in {}", path.display());
                        let _ = tx.send(path);
                    }
                }
            })
            .ok()?;

        if watcher
            .watch(data_dir, RecursiveMode::NonRecursive)
            .is_err()
        {
            log::warn!("config watcher: failed to watch {data_dir:?}");
            return None;
        }

        log::info!("config watcher started on {data_dir:?}");
        Some(Self {
            rx,
            _watcher: watcher,
        })
    }

    /// Drain all pending change notifications (non-blocking).
    pub fn drain_changes(&self) -> Vec<PathBuf> {
        let mut changes = Vec::new();
        while let Ok(path) = self.rx.try_recv() {
            changes.push(path);
        }
        changes
    }
}

fn is_config_document(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
