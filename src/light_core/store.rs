use crate::light_core::config::{Emitter, LocationModifiers, SceneConfig};
use crate::light_core::tables::{PeriodTable, WeatherTable};

/// Merged configuration for the currently loaded scene.
///
/// A store without scene data is not ready and produces no light sets.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    scene: Option<SceneConfig>,
}

impl ConfigStore {
    /// Builds the store for one scene load.
    ///
    /// Non-empty global tables replace the scene's own period and weather
    /// tables wholesale. Only emitters and location modifiers stay per-scene.
    pub fn merge(
        scene: Option<SceneConfig>,
        global_periods: Option<PeriodTable>,
        global_weathers: Option<WeatherTable>,
    ) -> Self {
        let Some(mut scene) = scene else {
            log::info!("no scene lighting data, ambient lights stay inactive");
            return Self::default();
        };

        if let Some(periods) = global_periods.filter(|t| !t.is_empty()) {
            scene.periods = periods;
        }
        if let Some(weathers) = global_weathers.filter(|t| !t.is_empty()) {
            scene.weathers = weathers;
        }

        log::info!(
            "merged lighting config: {} periods, {} weathers, {} emitters",
            scene.periods.len(),
            scene.weathers.len(),
            scene.emitters.len()
        );
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&scene) {
                Ok(json) => log::debug!("merged lighting config: {json}"),
                Err(e) => log::debug!("failed to serialize merged lighting config: {e}"),
            }
        }

        Self { scene: Some(scene) }
    }

    pub fn is_ready(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&SceneConfig> {
        self.scene.as_ref()
    }

    pub fn periods(&self) -> Option<&PeriodTable> {
        self.scene.as_ref().map(|s| &s.periods)
    }

    pub fn weathers(&self) -> Option<&WeatherTable> {
        self.scene.as_ref().map(|s| &s.weathers)
    }

    pub fn emitters(&self) -> &[Emitter] {
        self.scene
            .as_ref()
            .map(|s| s.emitters.as_slice())
            .unwrap_or_default()
    }

    pub fn options(&self) -> Option<&LocationModifiers> {
        self.scene.as_ref().map(|s| &s.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light_core::config::{Period, WeatherMod};

    fn scene_with_local_tables() -> SceneConfig {
        let mut scene = SceneConfig::default();
        scene.periods.insert("local_day", Period::default());
        scene.periods.insert("dusk", Period::default());
        scene.weathers.insert("local_rain", WeatherMod::NEUTRAL);
        scene.emitters.push(Emitter::default());
        scene.options.range_multiplier = 2.0;
        scene
    }

    #[test]
    fn missing_scene_is_not_ready() {
        let mut periods = PeriodTable::new();
        periods.insert("day", Period::default());

        let store = ConfigStore::merge(None, Some(periods), None);
        assert!(!store.is_ready());
        assert!(store.periods().is_none());
        assert!(store.emitters().is_empty());
    }

    #[test]
    fn global_tables_replace_scene_tables_wholesale() {
        let mut periods = PeriodTable::new();
        periods.insert("dusk", Period::default());
        periods.insert("night", Period::default());
        let mut weathers = WeatherTable::new();
        weathers.insert("snow", WeatherMod::NEUTRAL);

        let store = ConfigStore::merge(
            Some(scene_with_local_tables()),
            Some(periods),
            Some(weathers),
        );

        assert!(store.is_ready());
        let periods = store.periods().unwrap();
        assert_eq!(periods.len(), 2);
        assert!(periods.get("local_day").is_none());
        assert!(periods.get("night").is_some());

        let weathers = store.weathers().unwrap();
        assert!(weathers.get("local_rain").is_none());
        assert!(weathers.get("snow").is_some());

        assert_eq!(store.emitters().len(), 1);
        assert_eq!(store.options().unwrap().range_multiplier, 2.0);
    }

    #[test]
    fn absent_or_empty_global_tables_keep_scene_tables() {
        let store = ConfigStore::merge(
            Some(scene_with_local_tables()),
            Some(PeriodTable::new()),
            None,
        );

        assert!(store.is_ready());
        assert!(store.periods().unwrap().get("local_day").is_some());
        assert!(store.weathers().unwrap().get("local_rain").is_some());
    }
}
