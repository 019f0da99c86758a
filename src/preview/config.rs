use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use glam::Vec4;

use crate::light_core::color::rgb;
use crate::light_core::config::DEFAULT_KEY;
use crate::light_core::light_set::TickInput;

#[derive(Clone, Debug)]
pub struct PreviewArgs {
    pub data_dir: PathBuf,
    pub scene: String,
    pub period: String,
    pub requested_period: String,
    pub period_progress: f32,
    pub weather: String,
    pub previous_weather: String,
    pub weather_progress: f32,
    pub sun: Vec4,
    pub fog: Vec4,
    pub watch: bool,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("mod_data"),
            scene: DEFAULT_KEY.to_string(),
            period: DEFAULT_KEY.to_string(),
            requested_period: String::new(),
            period_progress: 0.5,
            weather: DEFAULT_KEY.to_string(),
            previous_weather: DEFAULT_KEY.to_string(),
            weather_progress: 1.0,
            sun: rgb(1.0, 1.0, 1.0),
            fog: rgb(0.5, 0.5, 0.5),
            watch: false,
        }
    }
}

impl PreviewArgs {
    pub fn from_env_args() -> Result<Self> {
        Self::from_iter(
            std::env::args_os().skip(1),
            std::env::var_os("AMBIENT_LIGHTS_DATA"),
        )
    }

    fn from_iter<I>(args: I, env_data_dir: Option<OsString>) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();

        if let Some(dir) = env_data_dir.filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy().to_string();
            if arg_str == "--watch" {
                config.watch = true;
                continue;
            }

            let mut value = || -> Result<String> {
                iter.next()
                    .map(|v| v.to_string_lossy().to_string())
                    .ok_or_else(|| anyhow!("{arg_str} requires a value"))
            };
            match arg_str.as_str() {
                "--data" => config.data_dir = PathBuf::from(value()?),
                "--scene" => config.scene = value()?,
                "--period" => config.period = value()?,
                "--requested-period" => config.requested_period = value()?,
                "--period-pct" => config.period_progress = parse_number(&arg_str, &value()?)?,
                "--weather" => config.weather = value()?,
                "--previous-weather" => config.previous_weather = value()?,
                "--weather-pct" => config.weather_progress = parse_number(&arg_str, &value()?)?,
                "--sun" => config.sun = parse_rgb(&value()?)?,
                "--fog" => config.fog = parse_rgb(&value()?)?,
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn tick(&self) -> TickInput<'_> {
        TickInput {
            period: &self.period,
            requested_period: &self.requested_period,
            period_progress: self.period_progress,
            sun: self.sun,
            fog: self.fog,
            weather: &self.weather,
            previous_weather: &self.previous_weather,
            weather_progress: self.weather_progress,
        }
    }
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid value {value:?} for {flag}"))
}

/// Parses `r,g,b` into an opaque color.
fn parse_rgb(value: &str) -> Result<Vec4> {
    let channels = value
        .split(',')
        .map(|c| parse_number::<f32>("color channel", c))
        .collect::<Result<Vec<_>>>()?;
    let [r, g, b] = channels[..] else {
        return Err(anyhow!("expected r,g,b but got {value:?}"));
    };
    Ok(rgb(r, g, b))
}
