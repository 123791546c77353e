//! Flat, display-ready view of generated conditions

use buzz_core::{Conditions, WindVector};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindReport {
    pub speed_mps: String,
    pub speed_kts: String,
    pub direction: String,
    pub direction_opposite: String,
}

impl From<&WindVector> for WindReport {
    fn from(wind: &WindVector) -> Self {
        Self {
            speed_mps: format!("{:.1}", wind.speed.meters_per_second()),
            speed_kts: format!("{:.0}", wind.speed.knots()),
            direction: wind.direction.degrees().to_string(),
            direction_opposite: wind.direction.opposite().degrees().to_string(),
        }
    }
}

/// Every randomized quantity of a scenario, rendered once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuzzReport {
    pub theater: String,
    pub date: String,
    pub time: String,
    pub temperature_c: String,
    pub qnh_inches_hg: String,
    pub qnh_hecto_pascals: String,
    pub precipitation: String,
    pub cloud_preset: String,
    pub cloud_base: String,
    pub fog_visibility_meters: String,
    pub fog_thickness: String,
    pub wind_0m: WindReport,
    pub wind_2000m: WindReport,
    pub wind_8000m: WindReport,
}

impl BuzzReport {
    pub fn new(theater: &str, date: NaiveDate, conditions: &Conditions) -> Self {
        let weather = conditions.weather();
        let atmospheric = weather.atmospheric();
        let clouds = weather.clouds();
        let fog = weather.fog();
        let wind = weather.wind();

        Self {
            theater: theater.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            time: conditions.start_time().format("%H:%M:%S").to_string(),
            temperature_c: atmospheric.temperature_celsius.to_string(),
            qnh_inches_hg: format!("{:.2}", atmospheric.qnh.inches_hg()),
            qnh_hecto_pascals: format!("{:.1}", atmospheric.qnh.hecto_pascals()),
            precipitation: clouds
                .map(|c| c.precipitation.to_string())
                .unwrap_or_else(|| "None".to_string()),
            cloud_preset: clouds
                .and_then(|c| c.preset)
                .map(|p| p.ui_name.to_string())
                .unwrap_or_else(|| "None".to_string()),
            cloud_base: clouds
                .map(|c| c.base.to_string())
                .unwrap_or_else(|| "-".to_string()),
            fog_visibility_meters: fog
                .map(|f| (f.visibility.meters() as i64).to_string())
                .unwrap_or_else(|| "-".to_string()),
            fog_thickness: fog
                .map(|f| f.thickness.to_string())
                .unwrap_or_else(|| "-".to_string()),
            wind_0m: WindReport::from(&wind.at_0m),
            wind_2000m: WindReport::from(&wind.at_2000m),
            wind_8000m: WindReport::from(&wind.at_8000m),
        }
    }
}
