//! Sea-level pressure and temperature synthesis

use crate::archetype::ArchetypeRules;
use crate::profile::SeasonalProfile;
use crate::season::interpolate_summer_winter;
use crate::types::{AtmosphericConditions, TimeOfDay};
use crate::units::Pressure;
use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

// "Safe" bounds, roughly what aircraft altimeters in the simulator accept. inHg.
pub const PRESSURE_SAFE_MIN: f64 = 28.4;
pub const PRESSURE_SAFE_MAX: f64 = 30.9;
const PRESSURE_STD_DEV: f64 = 0.1;

// °C
pub const TEMPERATURE_SAFE_MIN: i32 = -12;
pub const TEMPERATURE_SAFE_MAX: i32 = 49;
const TEMPERATURE_STD_DEV: f64 = 2.0;

/// Pressure and temperature before noise is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericBaseline {
    pub pressure: f64,
    pub temperature: f64,
}

impl AtmosphericBaseline {
    /// Seasonal baseline adjusted for time of day and archetype bias
    pub fn compute(
        profile: &SeasonalProfile,
        day: NaiveDate,
        time_of_day: TimeOfDay,
        rules: &ArchetypeRules,
    ) -> Self {
        let pressure = interpolate_summer_winter(
            profile.summer_avg_pressure,
            profile.winter_avg_pressure,
            day,
        );
        let mut temperature = interpolate_summer_winter(
            profile.summer_avg_temperature,
            profile.winter_avg_temperature,
            day,
        );

        let half_swing = profile.temperature_day_night_difference / 2.0;
        match time_of_day {
            TimeOfDay::Day => temperature += half_swing,
            TimeOfDay::Night => temperature -= half_swing,
            TimeOfDay::Dawn | TimeOfDay::Dusk => {}
        }

        Self {
            pressure: pressure + rules.pressure_bias,
            temperature: temperature + rules.temperature_bias,
        }
    }
}

fn normal<R: Rng + ?Sized>(mean: f64, std_dev: f64, rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}

/// Normally distributed pressure around `average`, clamped to the safe range
pub fn random_pressure<R: Rng + ?Sized>(average: f64, rng: &mut R) -> Pressure {
    let pressure = normal(average, PRESSURE_STD_DEV, rng);
    Pressure::from_inches_hg(pressure.clamp(PRESSURE_SAFE_MIN, PRESSURE_SAFE_MAX))
}

/// Normally distributed whole-degree temperature around `average`, clamped to the safe range
pub fn random_temperature<R: Rng + ?Sized>(average: f64, rng: &mut R) -> i32 {
    let temperature = normal(average, TEMPERATURE_STD_DEV, rng).round();
    (temperature as i32).clamp(TEMPERATURE_SAFE_MIN, TEMPERATURE_SAFE_MAX)
}

pub fn generate_atmospheric<R: Rng + ?Sized>(
    profile: &SeasonalProfile,
    day: NaiveDate,
    time_of_day: TimeOfDay,
    rules: &ArchetypeRules,
    rng: &mut R,
) -> AtmosphericConditions {
    let baseline = AtmosphericBaseline::compute(profile, day, time_of_day, rules);
    debug!(
        temperature = baseline.temperature,
        pressure = baseline.pressure,
        "Weather: before random"
    );

    let conditions = AtmosphericConditions {
        qnh: random_pressure(baseline.pressure, rng),
        temperature_celsius: random_temperature(baseline.temperature, rng),
    };
    debug!(
        temperature = conditions.temperature_celsius,
        pressure = conditions.qnh.inches_hg(),
        "Weather: after random"
    );
    conditions
}
