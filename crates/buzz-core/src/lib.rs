//! Weather synthesis engine for simulated scenarios
//!
//! Given a seasonal profile for a location and a calendar date, this crate
//! produces one plausible environmental snapshot: sea-level pressure and
//! temperature, wind at three altitudes, clouds, fog and a start time.
//! All randomness flows through a caller-owned generator so that results
//! are reproducible from a seed.

pub mod archetype;
pub mod atmosphere;
pub mod clouds;
pub mod conditions;
pub mod profile;
pub mod sampling;
pub mod season;
pub mod seed;
pub mod types;
pub mod units;
pub mod wind;

pub use archetype::*;
pub use atmosphere::*;
pub use clouds::*;
pub use conditions::*;
pub use profile::*;
pub use sampling::*;
pub use season::*;
pub use seed::*;
pub use types::*;
pub use units::*;
pub use wind::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No seasonal profile for location: {0}")]
    UnknownProfile(String),

    #[error("Invalid {what} weights: {source}")]
    InvalidWeights {
        what: &'static str,
        #[source]
        source: rand::distributions::WeightedError,
    },

    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid wind direction bounds: {min} > {max}")]
    InvalidWindDirection { min: i32, max: i32 },

    #[error("Invalid minimum wind speed: {0} m/s")]
    InvalidWindSpeed(f64),

    #[error("{what} is not a finite number: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type WeatherResult<T> = Result<T, WeatherError>;

pub(crate) fn ensure_finite(what: &'static str, value: f64) -> WeatherResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WeatherError::NonFinite { what, value })
    }
}
