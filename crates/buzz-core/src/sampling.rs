//! Scenario date and time-of-day sampling

use crate::types::TimeOfDay;
use crate::{WeatherError, WeatherResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Weighted index over finite, non-negative weights that are not all zero
pub(crate) fn weighted_index<const N: usize>(
    what: &'static str,
    weights: [f64; N],
) -> WeatherResult<WeightedIndex<f64>> {
    for w in weights {
        crate::ensure_finite(what, w)?;
    }
    WeightedIndex::new(weights).map_err(|source| WeatherError::InvalidWeights { what, source })
}

/// Relative weight of each time of day. Missing categories weigh zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDayChances(pub BTreeMap<TimeOfDay, f64>);

impl Default for TimeOfDayChances {
    fn default() -> Self {
        Self(BTreeMap::from([
            (TimeOfDay::Dawn, 25.0),
            (TimeOfDay::Day, 50.0),
            (TimeOfDay::Dusk, 15.0),
            (TimeOfDay::Night, 10.0),
        ]))
    }
}

impl TimeOfDayChances {
    pub fn weight(&self, time_of_day: TimeOfDay) -> f64 {
        self.0.get(&time_of_day).copied().unwrap_or(0.0)
    }

    fn index(&self) -> WeatherResult<WeightedIndex<f64>> {
        weighted_index("time of day", TimeOfDay::ALL.map(|t| self.weight(t)))
    }

    pub fn validate(&self) -> WeatherResult<()> {
        self.index().map(|_| ())
    }

    /// Draw a category proportionally to its weight; all-zero weights are an error
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WeatherResult<TimeOfDay> {
        let index = self.index()?;
        let time_of_day = TimeOfDay::ALL[index.sample(rng)];
        debug!(%time_of_day, "Time of day");
        Ok(time_of_day)
    }
}

/// Start of the scenario: a whole hour within the category's window
pub fn generate_start_time<R: Rng + ?Sized>(
    day: NaiveDate,
    time_of_day: TimeOfDay,
    rng: &mut R,
) -> NaiveDateTime {
    let hour = rng.gen_range(time_of_day.hour_range());
    day.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

/// Inclusive window from which scenario dates are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> WeatherResult<Self> {
        if end < start {
            return Err(WeatherError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse ISO dates (`2021-06-01`) or date-times (`2021-06-01T12:00:00`)
    pub fn parse(start: &str, end: &str) -> WeatherResult<Self> {
        Self::new(parse_iso(start)?, parse_iso(end)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Uniform whole-second instant in the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let span = (self.end - self.start).num_seconds();
        self.start + Duration::seconds(rng.gen_range(0..=span))
    }
}

fn parse_iso(value: &str) -> WeatherResult<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| WeatherError::InvalidDate(value.to_string()))
}
