use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::light_core::config::{Period, WeatherMod, DEFAULT_KEY};

/// Named time-of-day periods, with `"default"` as the fallback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodTable(HashMap<String, Period>);

impl PeriodTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, period: Period) {
        self.0.insert(name.into(), period);
    }

    pub fn get(&self, name: &str) -> Option<&Period> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact match, then `"default"`. `None` means there is no period data at all.
    pub fn resolve(&self, name: &str) -> Option<&Period> {
        self.get(name).or_else(|| self.get(DEFAULT_KEY))
    }

    /// Like [`resolve`](Self::resolve), with an empty `requested` name standing
    /// in for `current`.
    pub fn resolve_requested(&self, requested: &str, current: &str) -> Option<&Period> {
        let name = if requested.is_empty() {
            current
        } else {
            requested
        };
        self.resolve(name)
    }
}

/// Named weather modifiers, with `"default"` as the fallback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherTable(HashMap<String, WeatherMod>);

impl WeatherTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, weather: WeatherMod) {
        self.0.insert(name.into(), weather);
    }

    pub fn get(&self, name: &str) -> Option<&WeatherMod> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact match, then `"default"`, then [`WeatherMod::NEUTRAL`]. Never fails.
    pub fn resolve(&self, name: &str) -> WeatherMod {
        self.get(name)
            .or_else(|| self.get(DEFAULT_KEY))
            .copied()
            .unwrap_or(WeatherMod::NEUTRAL)
    }
}
