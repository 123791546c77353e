//! Core data types for generated weather

use crate::clouds::CloudPreset;
use crate::units::{Distance, Heading, Pressure, Speed};
use crate::WeatherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Time of day category of a scenario start
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(alias = "dawn")]
    Dawn,
    #[serde(alias = "day")]
    Day,
    #[serde(alias = "dusk")]
    Dusk,
    #[serde(alias = "night")]
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Dawn,
        TimeOfDay::Day,
        TimeOfDay::Dusk,
        TimeOfDay::Night,
    ];

    /// Inclusive range of start hours for this category
    pub fn hour_range(&self) -> RangeInclusive<u32> {
        match self {
            TimeOfDay::Dawn => 7..=9,
            TimeOfDay::Day => 11..=13,
            TimeOfDay::Dusk => 17..=19,
            TimeOfDay::Night => 21..=23,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeOfDay::Dawn => "dawn",
            TimeOfDay::Day => "day",
            TimeOfDay::Dusk => "dusk",
            TimeOfDay::Night => "night",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeOfDay {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WeatherError::UnknownTimeOfDay(s.to_string()))
    }
}

/// Meteorological season (northern hemisphere)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Precipitation carried by an explicit cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precipitation {
    None,
    Rain,
    Thunderstorm,
    Snow,
    SnowStorm,
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precipitation::None => "None",
            Precipitation::Rain => "Rain",
            Precipitation::Thunderstorm => "Thunderstorm",
            Precipitation::Snow => "Snow",
            Precipitation::SnowStorm => "SnowStorm",
        };
        f.write_str(name)
    }
}

/// Sea-level pressure and temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphericConditions {
    /// Pressure at sea level
    pub qnh: Pressure,

    /// Temperature at sea level, whole degrees Celsius
    pub temperature_celsius: i32,
}

/// Wind at a single altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindVector {
    pub direction: Heading,
    pub speed: Speed,
}

/// Wind at the three altitudes the simulator accepts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindConditions {
    pub at_0m: WindVector,
    pub at_2000m: WindVector,
    pub at_8000m: WindVector,
}

/// Cloud layer, either fully explicit or driven by a named preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Clouds {
    /// Cloud base in metres
    pub base: u32,
    pub density: u32,
    pub thickness: u32,
    pub precipitation: Precipitation,
    pub preset: Option<&'static CloudPreset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fog {
    pub visibility: Distance,
    pub thickness: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_ranges_do_not_overlap() {
        for (i, a) in TimeOfDay::ALL.iter().enumerate() {
            for b in &TimeOfDay::ALL[i + 1..] {
                let (ra, rb) = (a.hour_range(), b.hour_range());
                assert!(ra.end() < rb.start() || rb.end() < ra.start());
            }
        }
    }

    #[test]
    fn test_time_of_day_serde_accepts_both_spellings() {
        let a: TimeOfDay = serde_json::from_str(r#""Dusk""#).unwrap();
        let b: TimeOfDay = serde_json::from_str(r#""dusk""#).unwrap();
        assert_eq!(a, TimeOfDay::Dusk);
        assert_eq!(b, TimeOfDay::Dusk);
    }

    #[test]
    fn test_time_of_day_from_str() {
        assert_eq!("Night".parse::<TimeOfDay>().unwrap(), TimeOfDay::Night);
        assert_eq!("DAWN".parse::<TimeOfDay>().unwrap(), TimeOfDay::Dawn);
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_precipitation_names() {
        assert_eq!(Precipitation::None.to_string(), "None");
        assert_eq!(Precipitation::Thunderstorm.to_string(), "Thunderstorm");
    }
}
