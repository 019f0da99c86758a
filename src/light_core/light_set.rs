use glam::Vec4;
use serde::Serialize;

use crate::light_core::blend::{blend_orientation, BaseColors, WeatherBlend};
use crate::light_core::color::opaque;
use crate::light_core::config::{Cardinal, DEFAULT_KEY};
use crate::light_core::store::ConfigStore;

pub const FALLBACK_INTENSITY: f32 = 1.0;
pub const FALLBACK_RANGE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightOrientation {
    pub color: Vec4,
    pub intensity: f32,
    pub range: f32,
}

impl LightOrientation {
    pub fn fallback(fog: Vec4) -> Self {
        Self {
            color: opaque(fog),
            intensity: FALLBACK_INTENSITY,
            range: FALLBACK_RANGE,
        }
    }
}

/// One resolution pass: the four cardinal directions plus a `default` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightSet {
    pub north: LightOrientation,
    pub south: LightOrientation,
    pub east: LightOrientation,
    pub west: LightOrientation,
    pub default: LightOrientation,
}

impl LightSet {
    pub fn cardinal(&self, dir: Cardinal) -> &LightOrientation {
        match dir {
            Cardinal::North => &self.north,
            Cardinal::South => &self.south,
            Cardinal::East => &self.east,
            Cardinal::West => &self.west,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &LightOrientation)> + '_ {
        Cardinal::ALL
            .into_iter()
            .map(|dir| (dir.name(), self.cardinal(dir)))
            .chain(std::iter::once((DEFAULT_KEY, &self.default)))
    }
}

/// Per-tick values supplied by the host.
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// The host's current period.
    pub period: &'a str,
    /// Period to resolve instead of the current one. Empty means `period`.
    pub requested_period: &'a str,
    pub period_progress: f32,
    pub sun: Vec4,
    pub fog: Vec4,
    pub weather: &'a str,
    pub previous_weather: &'a str,
    pub weather_progress: f32,
}

/// Returns `None` while the store is not ready.
pub fn build_light_set(store: &ConfigStore, tick: &TickInput<'_>) -> Option<LightSet> {
    let scene = store.scene()?;

    let base = BaseColors::new(tick.sun, tick.fog);
    let period = scene
        .periods
        .resolve_requested(tick.requested_period, tick.period);
    let weather = WeatherBlend::resolve(
        &scene.weathers,
        tick.weather,
        tick.previous_weather,
        tick.weather_progress,
    );

    let [north, south, east, west] = Cardinal::ALL
        .map(|dir| blend_orientation(period, dir, tick.period_progress, &base, &weather));

    // Reuses the last direction's intensity and range with the raw fog color.
    let default = LightOrientation {
        color: base.fog,
        ..west
    };

    Some(LightSet {
        north,
        south,
        east,
        west,
        default,
    })
}
