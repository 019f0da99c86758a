use glam::{Vec3, Vec4};

use crate::light_core::color::{hsv_to_rgb, lerp, lerp_color, opaque, rgb_to_hsv, shift_hue};
use crate::light_core::config::{Cardinal, Period, WeatherMod};
use crate::light_core::light_set::LightOrientation;
use crate::light_core::tables::WeatherTable;

/// Host-provided sun and fog colors for the current tick, alpha forced opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    pub sun: Vec4,
    pub fog: Vec4,
}

impl BaseColors {
    pub fn new(sun: Vec4, fog: Vec4) -> Self {
        Self {
            sun: opaque(sun),
            fog: opaque(fog),
        }
    }
}

/// Current weather plus the one it is transitioning away from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherBlend {
    pub current: WeatherMod,
    pub previous: WeatherMod,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMultipliers {
    pub saturation: f32,
    pub value: f32,
    pub rgb: Vec3,
}

impl WeatherBlend {
    pub fn steady(current: WeatherMod) -> Self {
        Self {
            current,
            previous: current,
            progress: 1.0,
        }
    }

    pub fn resolve(table: &WeatherTable, current: &str, previous: &str, progress: f32) -> Self {
        Self {
            current: table.resolve(current),
            previous: table.resolve(previous),
            progress,
        }
    }

    /// Raw multipliers, crossfaded from `previous` only while `progress < 1.0`.
    /// Any other progress, NaN included, uses `current` as is.
    pub fn color_multipliers(&self) -> ColorMultipliers {
        let current = &self.current;
        if self.progress < 1.0 {
            let previous = &self.previous;
            let t = self.progress;
            return ColorMultipliers {
                saturation: lerp(previous.s_mod, current.s_mod, t),
                value: lerp(previous.v_mod, current.v_mod, t),
                rgb: Vec3::new(
                    lerp(previous.r_mod, current.r_mod, t),
                    lerp(previous.g_mod, current.g_mod, t),
                    lerp(previous.b_mod, current.b_mod, t),
                ),
            };
        }

        ColorMultipliers {
            saturation: current.s_mod,
            value: current.v_mod,
            rgb: Vec3::new(current.r_mod, current.g_mod, current.b_mod),
        }
    }
}

/// Per-channel multiply in linear RGB, then saturation and value scaling in HSV.
pub fn apply_weather_mod(color: Vec4, weather: &WeatherBlend) -> Vec4 {
    let m = weather.color_multipliers();
    let channels = (color.truncate() * m.rgb).extend(color.w);

    let mut hsv = rgb_to_hsv(channels);
    hsv.s *= m.saturation;
    hsv.v *= m.value;

    opaque(hsv_to_rgb(hsv))
}

/// Resolves one direction's light. `period == None` yields the neutral fallback.
pub fn blend_orientation(
    period: Option<&Period>,
    dir: Cardinal,
    period_progress: f32,
    base: &BaseColors,
    weather: &WeatherBlend,
) -> LightOrientation {
    let Some(period) = period else {
        return LightOrientation::fallback(base.fog);
    };

    let intensity = period.intensity.sample(period_progress);
    let range = period.range.sample(period_progress);

    let Some(set) = period.orientation(dir) else {
        log::debug!("period has no {} orientation, using fog color", dir.name());
        return LightOrientation {
            color: opaque(base.fog),
            intensity,
            range,
        };
    };

    let sun_mix = set.sun.sample(period_progress);
    let mut color = lerp_color(base.fog, base.sun, sun_mix);

    if let Some(hue) = set.hue {
        color = shift_hue(color, hue.sample(period_progress));
    }

    LightOrientation {
        color: opaque(apply_weather_mod(color, weather)),
        intensity,
        range,
    }
}
