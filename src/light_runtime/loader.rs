use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::light_core::config::SceneConfig;
use crate::light_core::store::ConfigStore;
use crate::light_core::tables::{PeriodTable, WeatherTable};

pub const WEATHER_SETS_FILE: &str = "weather_sets.json";
pub const GLOBAL_SETS_FILE: &str = "global_sets.json";

pub fn scene_file_name(scene: &str) -> String {
    format!("scene_{scene}.json")
}

/// `Ok(None)` when the file does not exist.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(document))
}

fn load_tier<T: DeserializeOwned>(path: &Path, label: &str) -> Option<T> {
    match read_document(path) {
        Ok(Some(document)) => {
            log::info!("loaded {label} from {}", path.display());
            Some(document)
        }
        Ok(None) => {
            log::info!("no {label} found at {}", path.display());
            None
        }
        Err(e) => {
            log::warn!("{e:#}, ignoring {label}");
            None
        }
    }
}

/// The three documents of one scene load. Absent or unreadable files are `None`.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub scene: Option<SceneConfig>,
    pub periods: Option<PeriodTable>,
    pub weathers: Option<WeatherTable>,
}

impl LoadedDocuments {
    pub fn load(data_dir: &Path, scene: &str) -> Self {
        let weathers = load_tier(&data_dir.join(WEATHER_SETS_FILE), "weather sets");
        let periods = load_tier(&data_dir.join(GLOBAL_SETS_FILE), "light sets");
        let scene_doc = load_tier(
            &data_dir.join(scene_file_name(scene)),
            &format!("lighting data for scene {scene}"),
        );

        Self {
            scene: scene_doc,
            periods,
            weathers,
        }
    }

    pub fn into_store(self) -> ConfigStore {
        ConfigStore::merge(self.scene, self.periods, self.weathers)
    }
}
