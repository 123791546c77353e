//! Altitude-banded wind synthesis

use crate::archetype::WindEnvelope;
use crate::types::{WindConditions, WindVector};
use crate::units::{Heading, Speed};
use crate::{WeatherError, WeatherResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Surface wind never drops below this, so smoke always drifts a little
const MIN_SURFACE_SPEED_MPS: f64 = 1.0;

/// Maximum veer between the surface and the upper bands, degrees
const ALOFT_VEER: i32 = 90;

const FACTOR_0M: f64 = 1.0;
const FACTOR_2000M: (f64, f64) = (1.5, 2.5);
const FACTOR_8000M: (f64, f64) = (2.0, 4.0);

/// Caller limits on surface wind direction and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindBounds {
    /// Lowest surface direction, degrees
    pub min_direction: i32,
    /// Highest surface direction, degrees
    pub max_direction: i32,
    /// Floor applied to both ends of the archetype's speed envelope
    pub min_speed: Speed,
}

impl Default for WindBounds {
    fn default() -> Self {
        Self {
            min_direction: 0,
            max_direction: 359,
            min_speed: Speed::ZERO,
        }
    }
}

impl WindBounds {
    pub fn validate(&self) -> WeatherResult<()> {
        if self.min_direction > self.max_direction {
            return Err(WeatherError::InvalidWindDirection {
                min: self.min_direction,
                max: self.max_direction,
            });
        }
        let floor = self.min_speed.meters_per_second();
        if !floor.is_finite() || floor < 0.0 {
            return Err(WeatherError::InvalidWindSpeed(floor));
        }
        Ok(())
    }
}

/// Wind at 0 m, 2000 m and 8000 m from a base speed drawn within `envelope`.
///
/// Both upper bands veer independently from the surface direction.
pub fn random_wind<R: Rng + ?Sized>(
    envelope: WindEnvelope,
    bounds: &WindBounds,
    rng: &mut R,
) -> WeatherResult<WindConditions> {
    bounds.validate()?;
    let envelope = envelope.with_floor(bounds.min_speed);

    let direction = Heading::random(bounds.min_direction, bounds.max_direction, rng);
    let direction_2000m = direction + Heading::random(-ALOFT_VEER, ALOFT_VEER, rng);
    let direction_8000m = direction + Heading::random(-ALOFT_VEER, ALOFT_VEER, rng);
    debug!(%direction, "Wind direction");

    let factor_2000m = rng.gen_range(FACTOR_2000M.0..=FACTOR_2000M.1);
    let factor_8000m = rng.gen_range(FACTOR_8000M.0..=FACTOR_8000M.1);
    let base = rng.gen_range(envelope.min.meters_per_second()..=envelope.max.meters_per_second());

    Ok(WindConditions {
        at_0m: WindVector {
            direction,
            speed: Speed::from_meters_per_second((base * FACTOR_0M).max(MIN_SURFACE_SPEED_MPS)),
        },
        at_2000m: WindVector {
            direction: direction_2000m,
            speed: Speed::from_meters_per_second(base * factor_2000m),
        },
        at_8000m: WindVector {
            direction: direction_8000m,
            speed: Speed::from_meters_per_second(base * factor_8000m),
        },
    })
}
