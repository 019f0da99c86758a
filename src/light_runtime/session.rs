use std::path::{Path, PathBuf};

use crate::light_core::light_set::{build_light_set, LightSet, TickInput};
use crate::light_core::store::ConfigStore;
use crate::light_runtime::loader::LoadedDocuments;
use crate::light_runtime::watcher::ConfigWatcher;

/// Owns the merged configuration for one loaded scene.
///
/// The store is rebuilt from disk on load and reload and replaced wholesale,
/// never patched in place.
pub struct SceneSession {
    data_dir: PathBuf,
    scene: String,
    store: ConfigStore,
    watcher: Option<ConfigWatcher>,
}

impl SceneSession {
    pub fn load(data_dir: impl Into<PathBuf>, scene: impl Into<String>) -> anyhow::Result<Self> {
        let data_dir = data_dir.into();
        let scene = scene.into();
        anyhow::ensure!(
            data_dir.is_dir(),
            "lighting data folder {} does not exist",
            data_dir.display()
        );

        let store = LoadedDocuments::load(&data_dir, &scene).into_store();
        Ok(Self {
            data_dir,
            scene,
            store,
            watcher: None,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn scene(&self) -> &str {
        &self.scene
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    pub fn reload(&mut self) {
        log::info!("reloading lighting data for scene {}", self.scene);
        self.store = LoadedDocuments::load(&self.data_dir, &self.scene).into_store();
    }

    /// Drops the scene's configuration. Light sets stop until the next load.
    pub fn unload(&mut self) {
        self.store = ConfigStore::default();
        self.watcher = None;
    }

    /// Starts watching the data folder. Returns whether a watcher is running.
    pub fn watch(&mut self) -> bool {
        if self.watcher.is_none() {
            self.watcher = ConfigWatcher::start(&self.data_dir);
        }
        self.watcher.is_some()
    }

    /// Reloads once if any document changed since the last poll.
    pub fn poll_reload(&mut self) -> bool {
        let Some(watcher) = &self.watcher else {
            return false;
        };
        if watcher.drain_changes().is_empty() {
            return false;
        }
        self.reload();
        true
    }

    pub fn light_set(&self, tick: &TickInput<'_>) -> Option<LightSet> {
        build_light_set(&self.store, tick)
    }
}
