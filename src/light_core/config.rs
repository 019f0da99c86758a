use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::light_core::color::lerp;
use crate::light_core::tables::{PeriodTable, WeatherTable};

/// Reserved key used as the terminal fallback in period and weather tables.
pub const DEFAULT_KEY: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::South,
        Cardinal::East,
        Cardinal::West,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cardinal::North => "north",
            Cardinal::South => "south",
            Cardinal::East => "east",
            Cardinal::West => "west",
        }
    }
}

/// A `[start, end]` pair sampled by period or weather progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyframe(pub [f32; 2]);

impl Keyframe {
    pub const fn new(start: f32, end: f32) -> Self {
        Self([start, end])
    }

    pub const fn constant(value: f32) -> Self {
        Self([value, value])
    }

    pub fn start(self) -> f32 {
        self.0[0]
    }

    pub fn end(self) -> f32 {
        self.0[1]
    }

    pub fn sample(self, t: f32) -> f32 {
        lerp(self.0[0], self.0[1], t)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub emitters: Vec<Emitter>,
    pub periods: PeriodTable,
    pub weathers: WeatherTable,
    pub options: LocationModifiers,
}

/// Light placement descriptor. Carried through untouched for the placement layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emitter {
    pub description: String,
    pub position: String,
    pub orientation: String,
    pub size: f32,
    pub cover: f32,
    pub priority: i32,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            description: String::new(),
            position: String::new(),
            orientation: String::new(),
            size: 1.0,
            cover: 0.0,
            priority: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    pub orientations: HashMap<String, OrientationSet>,
    pub intensity: Keyframe,
    pub range: Keyframe,
}

impl Default for Period {
    fn default() -> Self {
        Self {
            orientations: HashMap::new(),
            intensity: Keyframe::constant(1.0),
            range: Keyframe::constant(10.0),
        }
    }
}

impl Period {
    pub fn orientation(&self, dir: Cardinal) -> Option<&OrientationSet> {
        self.orientations.get(dir.name())
    }

    pub fn with_orientation(mut self, dir: Cardinal, set: OrientationSet) -> Self {
        self.orientations.insert(dir.name().to_string(), set);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationSet {
    pub sun: Keyframe,
    pub hue: Option<Keyframe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherMod {
    #[serde(rename = "sMod")]
    pub s_mod: f32,
    #[serde(rename = "vMod")]
    pub v_mod: f32,
    #[serde(rename = "rMod")]
    pub r_mod: f32,
    #[serde(rename = "gMod")]
    pub g_mod: f32,
    #[serde(rename = "bMod")]
    pub b_mod: f32,
    #[serde(rename = "intMod")]
    pub int_mod: f32,
    #[serde(rename = "rngMod")]
    pub rng_mod: f32,
}

impl WeatherMod {
    pub const NEUTRAL: WeatherMod = WeatherMod {
        s_mod: 1.0,
        v_mod: 1.0,
        r_mod: 1.0,
        g_mod: 1.0,
        b_mod: 1.0,
        int_mod: 1.0,
        rng_mod: 1.0,
    };
}

impl Default for WeatherMod {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationModifiers {
    pub override_shadows: String,
    pub intensity_multiplier: f32,
    pub range_multiplier: f32,
    pub aurora_range_multiplier: f32,
    pub aurora_intensity_multiplier: f32,
}

impl Default for LocationModifiers {
    fn default() -> Self {
        Self {
            override_shadows: String::new(),
            intensity_multiplier: 1.0,
            range_multiplier: 1.0,
            aurora_range_multiplier: 1.0,
            aurora_intensity_multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_document_parses_with_defaults() {
        let json = r#"{
            "emitters": [{ "description": "window", "position": "0,1,0", "orientation": "north" }],
            "periods": {
                "day": {
                    "orientations": {
                        "north": { "sun": [0.0, 1.0], "hue": [0.0, 12.0] },
                        "south": { "sun": [0.2, 0.4] }
                    },
                    "intensity": [1.0, 2.0],
                    "range": [5.0, 15.0]
                }
            },
            "weathers": { "rain": { "rMod": 0.5, "intMod": 0.8 } },
            "options": { "intensity_multiplier": 1.25 }
        }"#;

        let scene: SceneConfig = serde_json::from_str(json).unwrap();

        let emitter = &scene.emitters[0];
        assert_eq!(emitter.description, "window");
        assert_eq!(emitter.size, 1.0);
        assert_eq!(emitter.cover, 0.0);
        assert_eq!(emitter.priority, 1);

        let day = scene.periods.get("day").unwrap();
        let north = day.orientation(Cardinal::North).unwrap();
        assert_eq!(north.sun, Keyframe::new(0.0, 1.0));
        assert_eq!(north.hue, Some(Keyframe::new(0.0, 12.0)));
        assert_eq!(day.orientation(Cardinal::South).unwrap().hue, None);
        assert!(day.orientation(Cardinal::East).is_none());
        assert_eq!(day.range, Keyframe::new(5.0, 15.0));

        let rain = scene.weathers.get("rain").unwrap();
        assert_eq!(rain.r_mod, 0.5);
        assert_eq!(rain.int_mod, 0.8);
        assert_eq!(rain.g_mod, 1.0);
        assert_eq!(rain.s_mod, 1.0);

        assert_eq!(scene.options.intensity_multiplier, 1.25);
        assert_eq!(scene.options.range_multiplier, 1.0);
        assert_eq!(scene.options.override_shadows, "");
    }

    #[test]
    fn period_without_keyframes_uses_neutral_intensity_and_range() {
        let period: Period = serde_json::from_str(r#"{ "orientations": {} }"#).unwrap();
        assert_eq!(period.intensity, Keyframe::constant(1.0));
        assert_eq!(period.range, Keyframe::constant(10.0));
    }

    #[test]
    fn empty_weather_mod_is_neutral() {
        let weather: WeatherMod = serde_json::from_str("{}").unwrap();
        assert_eq!(weather, WeatherMod::NEUTRAL);
    }

    #[test]
    fn keyframe_samples_between_endpoints() {
        let frame = Keyframe::new(5.0, 15.0);
        assert_eq!(frame.sample(0.0), 5.0);
        assert_eq!(frame.sample(1.0), 15.0);
        assert!((frame.sample(0.5) - 10.0).abs() < 1e-6);
        assert!((frame.sample(2.0) - 25.0).abs() < 1e-5);
    }
}
