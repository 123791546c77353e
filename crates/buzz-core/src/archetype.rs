//! Weather archetypes and their selection
//!
//! Each archetype is a fixed bundle of generation rules. Synthesizers read
//! the rules through [`WeatherArchetype::rules`]; nothing here holds state.

use crate::profile::WeatherTypeChances;
use crate::units::Speed;
use crate::sampling::weighted_index;
use crate::WeatherResult;
use rand::distributions::WeightedIndex;
use rand::distributions::Distribution;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherArchetype {
    ClearSkies,
    Cloudy,
    Raining,
    Thunderstorm,
}

/// How an archetype produces its cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudRule {
    /// No clouds at all
    Clear,
    /// Random catalogue preset, with or without rain
    Preset { rain: bool },
    /// Explicit thunderstorm layer
    Storm,
}

/// How an archetype produces fog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogRule {
    Never,
    /// Fog with probability 1/n
    OneIn(u32),
}

/// Bounds of the base wind speed before the caller's floor is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindEnvelope {
    pub min: Speed,
    pub max: Speed,
}

impl WindEnvelope {
    const fn mps(min: f64, max: f64) -> Self {
        Self {
            min: Speed::from_meters_per_second(min),
            max: Speed::from_meters_per_second(max),
        }
    }

    /// Envelope widened upward so neither bound is below `floor`
    pub fn with_floor(&self, floor: Speed) -> WindEnvelope {
        WindEnvelope {
            min: self.min.max(floor),
            max: self.max.max(floor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeRules {
    /// Added to the baseline pressure, inHg
    pub pressure_bias: f64,
    /// Added to the baseline temperature, °C
    pub temperature_bias: f64,
    pub clouds: CloudRule,
    pub fog: FogRule,
    pub wind: WindEnvelope,
}

const CLEAR_SKIES: ArchetypeRules = ArchetypeRules {
    pressure_bias: 0.4,
    temperature_bias: 3.0,
    clouds: CloudRule::Clear,
    fog: FogRule::OneIn(5),
    wind: WindEnvelope::mps(2.0, 8.0),
};

// Fog is never combined with cloud presets; the simulator does not support it.
const CLOUDY: ArchetypeRules = ArchetypeRules {
    pressure_bias: 0.0,
    temperature_bias: 0.0,
    clouds: CloudRule::Preset { rain: false },
    fog: FogRule::Never,
    wind: WindEnvelope::mps(2.0, 8.0),
};

const RAINING: ArchetypeRules = ArchetypeRules {
    pressure_bias: -0.22,
    temperature_bias: -3.0,
    clouds: CloudRule::Preset { rain: true },
    fog: FogRule::Never,
    wind: WindEnvelope::mps(2.0, 12.0),
};

const THUNDERSTORM: ArchetypeRules = ArchetypeRules {
    pressure_bias: 0.1,
    temperature_bias: -3.0,
    clouds: CloudRule::Storm,
    fog: FogRule::Never,
    wind: WindEnvelope::mps(4.0, 15.0),
};

impl WeatherArchetype {
    /// Selection order used when drawing from weights
    pub const ALL: [WeatherArchetype; 4] = [
        WeatherArchetype::Thunderstorm,
        WeatherArchetype::Raining,
        WeatherArchetype::Cloudy,
        WeatherArchetype::ClearSkies,
    ];

    pub fn rules(&self) -> &'static ArchetypeRules {
        match self {
            WeatherArchetype::ClearSkies => &CLEAR_SKIES,
            WeatherArchetype::Cloudy => &CLOUDY,
            WeatherArchetype::Raining => &RAINING,
            WeatherArchetype::Thunderstorm => &THUNDERSTORM,
        }
    }

    fn weight(&self, chances: &WeatherTypeChances) -> f64 {
        match self {
            WeatherArchetype::ClearSkies => chances.clear_skies,
            WeatherArchetype::Cloudy => chances.cloudy,
            WeatherArchetype::Raining => chances.raining,
            WeatherArchetype::Thunderstorm => chances.thunderstorm,
        }
    }
}

impl WeatherTypeChances {
    /// Weighted index in [`WeatherArchetype::ALL`] order
    pub(crate) fn index(&self, what: &'static str) -> WeatherResult<WeightedIndex<f64>> {
        weighted_index(what, WeatherArchetype::ALL.map(|a| a.weight(self)))
    }
}

impl fmt::Display for WeatherArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherArchetype::ClearSkies => "clear skies",
            WeatherArchetype::Cloudy => "cloudy",
            WeatherArchetype::Raining => "raining",
            WeatherArchetype::Thunderstorm => "thunderstorm",
        };
        f.write_str(name)
    }
}

/// Draw an archetype proportionally to the seasonal weights.
///
/// With `clear_weather` the weights collapse to clear skies only, whatever
/// the season says.
pub fn select_archetype<R: Rng + ?Sized>(
    seasonal: &WeatherTypeChances,
    clear_weather: bool,
    rng: &mut R,
) -> WeatherResult<WeatherArchetype> {
    let chances = if clear_weather {
        &WeatherTypeChances::CLEAR_ONLY
    } else {
        seasonal
    };
    debug!(?chances, clear_weather, "Weather: chances");

    let index = chances.index("weather type")?;
    let archetype = WeatherArchetype::ALL[index.sample(rng)];
    debug!(%archetype, "Weather: type");
    Ok(archetype)
}
