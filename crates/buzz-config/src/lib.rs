use buzz_core::{
    DateRange, ProfileRegistry, SeedMethod, Speed, TimeOfDay, TimeOfDayChances, WeatherError,
    WindBounds,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeConfig {
    pub start: String,
    pub end: String,
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        Self {
            start: "2000-01-01".to_string(),
            end: "2000-12-31".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub min_direction: i32,
    pub max_direction: i32,
    pub min_speed_mps: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            min_direction: 0,
            max_direction: 359,
            min_speed_mps: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuzzConfig {
    pub random_seed_method: SeedMethod,
    pub random_date_range: DateRangeConfig,
    /// Time of day name -> relative weight
    pub day_time_chances: BTreeMap<String, f64>,
    pub wind: WindConfig,
    /// Seasonal profile per theater
    pub profiles: ProfileRegistry,
}

impl Default for BuzzConfig {
    fn default() -> Self {
        Self {
            random_seed_method: SeedMethod::default(),
            random_date_range: DateRangeConfig::default(),
            day_time_chances: TimeOfDayChances::default()
                .0
                .into_iter()
                .map(|(t, w)| (format!("{:?}", t), w))
                .collect(),
            wind: WindConfig::default(),
            profiles: ProfileRegistry::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid setting: {0}")]
    Weather(#[from] WeatherError),
    #[error("Invalid profile {location}: {source}")]
    Profile {
        location: String,
        #[source]
        source: WeatherError,
    },
}

impl BuzzConfig {
    /// Load configuration from BUZZ_CONFIG path (TOML) if present, with reasonable defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("BUZZ_CONFIG").unwrap_or_else(|_| "buzz.toml".to_string());
        if Path::new(&path).exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(%path, "no config file, using defaults");
            Ok(BuzzConfig::default())
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Parse and validate; malformed settings fail here rather than mid-generation
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg = toml::from_str::<BuzzConfig>(s)?;
        cfg.date_range()?;
        cfg.time_of_day_chances()?.validate()?;
        cfg.wind_bounds().validate()?;
        for (location, profile) in cfg.profiles.iter() {
            profile.validate().map_err(|source| ConfigError::Profile {
                location: location.to_string(),
                source,
            })?;
        }
        Ok(cfg)
    }

    pub fn date_range(&self) -> Result<DateRange, ConfigError> {
        let range = &self.random_date_range;
        Ok(DateRange::parse(&range.start, &range.end)?)
    }

    pub fn time_of_day_chances(&self) -> Result<TimeOfDayChances, ConfigError> {
        let mut chances = BTreeMap::new();
        for (name, weight) in &self.day_time_chances {
            chances.insert(name.parse::<TimeOfDay>()?, *weight);
        }
        Ok(TimeOfDayChances(chances))
    }

    pub fn wind_bounds(&self) -> WindBounds {
        WindBounds {
            min_direction: self.wind.min_direction,
            max_direction: self.wind.max_direction,
            min_speed: Speed::from_meters_per_second(self.wind.min_speed_mps),
        }
    }
}
