//! Per-location seasonal statistics

use crate::types::Season;
use crate::{ensure_finite, WeatherError, WeatherResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative weights of each weather archetype. Need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherTypeChances {
    pub thunderstorm: f64,
    pub raining: f64,
    pub cloudy: f64,
    pub clear_skies: f64,
}

impl WeatherTypeChances {
    /// Weights used when clear weather is forced
    pub const CLEAR_ONLY: WeatherTypeChances = WeatherTypeChances {
        thunderstorm: 0.0,
        raining: 0.0,
        cloudy: 0.0,
        clear_skies: 100.0,
    };
}

/// Archetype weights for every season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalChances {
    pub winter: WeatherTypeChances,
    pub spring: WeatherTypeChances,
    pub summer: WeatherTypeChances,
    pub fall: WeatherTypeChances,
}

impl SeasonalChances {
    /// Every season must carry finite, non-negative weights, not all zero
    pub fn validate(&self) -> WeatherResult<()> {
        self.winter.index("winter weather type")?;
        self.spring.index("spring weather type")?;
        self.summer.index("summer weather type")?;
        self.fall.index("fall weather type")?;
        Ok(())
    }

    pub fn for_season(&self, season: Season) -> &WeatherTypeChances {
        match season {
            Season::Winter => &self.winter,
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Fall => &self.fall,
        }
    }
}

/// Seasonal baselines of one location. Pressures are in inHg, temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    pub summer_avg_pressure: f64,
    pub winter_avg_pressure: f64,
    pub summer_avg_temperature: f64,
    pub winter_avg_temperature: f64,
    pub temperature_day_night_difference: f64,
    pub weather_type_chances: SeasonalChances,
}

impl SeasonalProfile {
    pub fn validate(&self) -> WeatherResult<()> {
        ensure_finite("summer_avg_pressure", self.summer_avg_pressure)?;
        ensure_finite("winter_avg_pressure", self.winter_avg_pressure)?;
        ensure_finite("summer_avg_temperature", self.summer_avg_temperature)?;
        ensure_finite("winter_avg_temperature", self.winter_avg_temperature)?;
        ensure_finite(
            "temperature_day_night_difference",
            self.temperature_day_night_difference,
        )?;
        self.weather_type_chances.validate()
    }
}

/// Seasonal profiles keyed by location (theater) name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, SeasonalProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: impl Into<String>, profile: SeasonalProfile) {
        self.profiles.insert(location.into(), profile);
    }

    pub fn get(&self, location: &str) -> WeatherResult<&SeasonalProfile> {
        self.profiles
            .get(location)
            .ok_or_else(|| WeatherError::UnknownProfile(location.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeasonalProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<(String, SeasonalProfile)> for ProfileRegistry {
    fn from_iter<I: IntoIterator<Item = (String, SeasonalProfile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}
