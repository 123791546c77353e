//! Scenario buzzer: turns settings and a theater name into one set of conditions

pub mod report;

pub use report::*;

use anyhow::{Context, Result};
use buzz_config::BuzzConfig;
use buzz_core::{
    scenario_rng, Conditions, ConditionsRequest, DateRange, ProfileRegistry, SeedMethod,
    TimeOfDayChances, WindBounds,
};
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

const CLEAR_WEATHER_SUFFIX: &str = " clear weather";

/// Conditions generated for a theater, with the label and date they were generated for
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub theater: String,
    pub date: NaiveDate,
    pub conditions: Conditions,
}

impl Scenario {
    pub fn report(&self) -> BuzzReport {
        BuzzReport::new(&self.theater, self.date, &self.conditions)
    }
}

/// Validated settings ready for repeated scenario generation
pub struct Buzzer {
    seed_method: SeedMethod,
    date_range: DateRange,
    time_of_day_chances: TimeOfDayChances,
    wind: WindBounds,
    profiles: ProfileRegistry,
}

impl Buzzer {
    pub fn new(config: BuzzConfig) -> Result<Self> {
        Ok(Self {
            seed_method: config.random_seed_method,
            date_range: config.date_range().context("Invalid random_date_range")?,
            time_of_day_chances: config
                .time_of_day_chances()
                .context("Invalid day_time_chances")?,
            wind: config.wind_bounds(),
            profiles: config.profiles,
        })
    }

    /// Generate conditions, seeding the generator as configured.
    ///
    /// `today` is the real-world date used by date-based seeding.
    pub fn buzz(&self, theater: &str, clear_weather: bool, today: NaiveDate) -> Result<Scenario> {
        let mut rng = scenario_rng(self.seed_method, theater, today);
        self.buzz_with_rng(theater, clear_weather, &mut rng)
    }

    /// Generate conditions drawing from the given generator
    pub fn buzz_with_rng<R: Rng + ?Sized>(
        &self,
        theater: &str,
        clear_weather: bool,
        rng: &mut R,
    ) -> Result<Scenario> {
        let profile = self
            .profiles
            .get(theater)
            .with_context(|| format!("Cannot generate weather for {}", theater))?;

        let date = self.date_range.sample(rng).date();
        debug!(%date, "Scenario date");
        let time_of_day = self.time_of_day_chances.sample(rng)?;

        let request = ConditionsRequest {
            profile,
            day: date,
            time_of_day,
            clear_weather,
            wind: self.wind,
        };
        let conditions = Conditions::generate(&request, rng)
            .with_context(|| format!("Weather generation failed for {}", theater))?;

        let weather = conditions.weather();
        info!(
            theater,
            start_time = %conditions.start_time(),
            archetype = %weather.archetype(),
            temperature_c = weather.atmospheric().temperature_celsius,
            qnh_inhg = weather.atmospheric().qnh.inches_hg(),
            "Conditions generated"
        );

        let theater = if clear_weather {
            format!("{}{}", theater, CLEAR_WEATHER_SUFFIX)
        } else {
            theater.to_string()
        };
        Ok(Scenario {
            theater,
            date,
            conditions,
        })
    }

    pub fn theaters(&self) -> impl Iterator<Item = &str> {
        self.profiles.locations()
    }
}
