//! Top-level conditions generation

use crate::archetype::{select_archetype, WeatherArchetype};
use crate::atmosphere::generate_atmospheric;
use crate::clouds::{generate_clouds, generate_fog};
use crate::profile::SeasonalProfile;
use crate::sampling::generate_start_time;
use crate::season::determine_season;
use crate::types::{AtmosphericConditions, Clouds, Fog, TimeOfDay, WindConditions};
use crate::wind::{random_wind, WindBounds};
use crate::WeatherResult;
use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Full weather state of one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weather {
    archetype: WeatherArchetype,
    atmospheric: AtmosphericConditions,
    clouds: Option<Clouds>,
    fog: Option<Fog>,
    wind: WindConditions,
}

impl Weather {
    pub fn new(
        archetype: WeatherArchetype,
        atmospheric: AtmosphericConditions,
        clouds: Option<Clouds>,
        fog: Option<Fog>,
        wind: WindConditions,
    ) -> Self {
        Self {
            archetype,
            atmospheric,
            clouds,
            fog,
            wind,
        }
    }

    /// Run every synthesizer for an already selected archetype
    pub fn generate<R: Rng + ?Sized>(
        archetype: WeatherArchetype,
        profile: &SeasonalProfile,
        day: NaiveDate,
        time_of_day: TimeOfDay,
        wind_bounds: &WindBounds,
        rng: &mut R,
    ) -> WeatherResult<Self> {
        let rules = archetype.rules();
        let atmospheric = generate_atmospheric(profile, day, time_of_day, rules, rng);
        let clouds = generate_clouds(rules.clouds, rng);
        let fog = generate_fog(rules.fog, rng);
        let wind = random_wind(rules.wind, wind_bounds, rng)?;

        Ok(Self::new(archetype, atmospheric, clouds, fog, wind))
    }

    pub fn archetype(&self) -> WeatherArchetype {
        self.archetype
    }

    pub fn atmospheric(&self) -> &AtmosphericConditions {
        &self.atmospheric
    }

    pub fn clouds(&self) -> Option<&Clouds> {
        self.clouds.as_ref()
    }

    pub fn fog(&self) -> Option<&Fog> {
        self.fog.as_ref()
    }

    pub fn wind(&self) -> &WindConditions {
        &self.wind
    }
}

/// Inputs of one conditions generation
#[derive(Debug, Clone, Copy)]
pub struct ConditionsRequest<'a> {
    pub profile: &'a SeasonalProfile,
    pub day: NaiveDate,
    pub time_of_day: TimeOfDay,
    /// Force clear skies regardless of the season's weights
    pub clear_weather: bool,
    pub wind: WindBounds,
}

/// Time and weather of a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditions {
    time_of_day: TimeOfDay,
    start_time: NaiveDateTime,
    weather: Weather,
}

impl Conditions {
    pub fn new(time_of_day: TimeOfDay, start_time: NaiveDateTime, weather: Weather) -> Self {
        Self {
            time_of_day,
            start_time,
            weather,
        }
    }

    /// Generate a complete snapshot. Any failing step aborts the whole call.
    #[instrument(skip_all, fields(day = %request.day, time_of_day = %request.time_of_day))]
    pub fn generate<R: Rng + ?Sized>(
        request: &ConditionsRequest<'_>,
        rng: &mut R,
    ) -> WeatherResult<Self> {
        request.wind.validate()?;
        request.profile.validate()?;
        let start_time = generate_start_time(request.day, request.time_of_day, rng);

        let season = determine_season(request.day);
        debug!(?season, "Weather: season");
        debug!(clear_weather = request.clear_weather, "Forced clear weather?");
        let chances = request.profile.weather_type_chances.for_season(season);
        let archetype = select_archetype(chances, request.clear_weather, rng)?;

        let weather = Weather::generate(
            archetype,
            request.profile,
            request.day,
            request.time_of_day,
            &request.wind,
            rng,
        )?;

        Ok(Self::new(request.time_of_day, start_time, weather))
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn weather(&self) -> &Weather {
        &self.weather
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::{
        PRESSURE_SAFE_MAX, PRESSURE_SAFE_MIN, TEMPERATURE_SAFE_MAX, TEMPERATURE_SAFE_MIN,
    };
    use crate::profile::fixtures::{chances, temperate};
    use crate::types::Precipitation;
    use crate::units::Speed;
    use crate::WeatherError;
    use chrono::Timelike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn peak_summer() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 2).unwrap()
    }

    fn request(profile: &SeasonalProfile, day: NaiveDate, time_of_day: TimeOfDay) -> ConditionsRequest<'_> {
        ConditionsRequest {
            profile,
            day,
            time_of_day,
            clear_weather: false,
            wind: WindBounds::default(),
        }
    }

    #[test]
    fn test_invariants_hold_across_seeds() {
        let profile = temperate();
        let days = [
            NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2023, 4, 18).unwrap(),
            peak_summer(),
            NaiveDate::from_ymd_opt(2023, 10, 30).unwrap(),
        ];
        for seed in 0..400u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let day = days[(seed % 4) as usize];
            let tod = TimeOfDay::ALL[(seed / 4 % 4) as usize];
            let c = Conditions::generate(&request(&profile, day, tod), &mut rng).unwrap();

            let atmo = c.weather().atmospheric();
            assert!((TEMPERATURE_SAFE_MIN..=TEMPERATURE_SAFE_MAX).contains(&atmo.temperature_celsius));
            assert!((PRESSURE_SAFE_MIN..=PRESSURE_SAFE_MAX).contains(&atmo.qnh.inches_hg()));

            assert!(tod.hour_range().contains(&c.start_time().hour()));
            assert_eq!(c.start_time().date(), day);

            let wind = c.weather().wind();
            let surface = wind.at_0m.speed.meters_per_second();
            assert!(surface >= 1.0);
            assert!(wind.at_2000m.speed.meters_per_second() >= surface);
            assert!(wind.at_8000m.speed.meters_per_second() >= surface);

            let uses_preset = c.weather().clouds().map_or(false, |cl| cl.preset.is_some());
            if uses_preset {
                assert!(c.weather().fog().is_none());
            }
        }
    }

    #[test]
    fn test_archetype_shapes_clouds_and_fog() {
        let profile = temperate();
        for seed in 0..300u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let c = Conditions::generate(&request(&profile, peak_summer(), TimeOfDay::Dusk), &mut rng)
                .unwrap();
            let w = c.weather();
            match w.archetype() {
                WeatherArchetype::ClearSkies => assert!(w.clouds().is_none()),
                WeatherArchetype::Cloudy => {
                    let preset = w.clouds().and_then(|cl| cl.preset).unwrap();
                    assert!(!preset.is_rain());
                    assert!(w.fog().is_none());
                }
                WeatherArchetype::Raining => {
                    let preset = w.clouds().and_then(|cl| cl.preset).unwrap();
                    assert!(preset.is_rain());
                    assert!(w.fog().is_none());
                }
                WeatherArchetype::Thunderstorm => {
                    let clouds = w.clouds().unwrap();
                    assert_eq!(clouds.precipitation, Precipitation::Thunderstorm);
                    assert!(w.fog().is_none());
                }
            }
        }
    }

    #[test]
    fn test_forced_clear_end_to_end() {
        let mut profile = temperate();
        profile.weather_type_chances.summer = chances(100.0, 0.0, 0.0, 0.0);
        let mut fogged = 0;
        let runs = 2000;
        for seed in 0..runs {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let req = ConditionsRequest {
                clear_weather: true,
                ..request(&profile, peak_summer(), TimeOfDay::Day)
            };
            let c = Conditions::generate(&req, &mut rng).unwrap();
            let w = c.weather();
            assert_eq!(w.archetype(), WeatherArchetype::ClearSkies);
            assert!(w.clouds().is_none());
            if w.fog().is_some() {
                fogged += 1;
            }
            let surface = w.wind().at_0m.speed.meters_per_second();
            assert!((2.0..=8.0).contains(&surface));
            // N(31, 2): twelve sigma either side is never reached
            assert!((7..=49).contains(&w.atmospheric().temperature_celsius));
        }
        let ratio = fogged as f64 / runs as f64;
        assert!(ratio < 0.25, "fog ratio {ratio}");
    }

    #[test]
    fn test_same_seed_same_conditions() {
        let profile = temperate();
        let req = ConditionsRequest {
            wind: WindBounds {
                min_direction: 10,
                max_direction: 300,
                min_speed: Speed::from_meters_per_second(3.0),
            },
            ..request(&profile, NaiveDate::from_ymd_opt(2022, 2, 14).unwrap(), TimeOfDay::Night)
        };
        let a = Conditions::generate(&req, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let b = Conditions::generate(&req, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_profile_fails() {
        let mut profile = temperate();
        profile.summer_avg_temperature = f64::NAN;
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(matches!(
            Conditions::generate(&request(&profile, peak_summer(), TimeOfDay::Day), &mut rng),
            Err(WeatherError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_empty_season_weights_fail() {
        let mut profile = temperate();
        profile.weather_type_chances.winter = chances(0.0, 0.0, 0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let day = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
        assert!(Conditions::generate(&request(&profile, day, TimeOfDay::Dawn), &mut rng).is_err());
    }
}
