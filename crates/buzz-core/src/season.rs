//! Seasonal position of a calendar date

use crate::types::Season;
use chrono::{Datelike, NaiveDate};

/// Day of year treated as the middle of summer
pub const PEAK_SUMMER_DAY: u32 = 183;

const SPRING_START: u32 = 80;
const SUMMER_START: u32 = 172;
const FALL_START: u32 = 266;
const WINTER_START: u32 = 355;

/// Northern-hemisphere season of a date, by fixed day-of-year boundaries
pub fn determine_season(day: NaiveDate) -> Season {
    let day_of_year = day.ordinal();
    if day_of_year >= WINTER_START || day_of_year < SPRING_START {
        Season::Winter
    } else if day_of_year < SUMMER_START {
        Season::Spring
    } else if day_of_year < FALL_START {
        Season::Summer
    } else {
        Season::Fall
    }
}

/// Normalized distance of a date from peak summer, in `[0, 1]`
pub fn winter_factor(day: NaiveDate) -> f64 {
    let distance = day.ordinal().abs_diff(PEAK_SUMMER_DAY);
    (distance as f64 / PEAK_SUMMER_DAY as f64).clamp(0.0, 1.0)
}

/// Linear blend between the summer and winter value for a date.
///
/// This is a triangular wave over the year, not a sinusoid: it is not smooth
/// across the new year.
pub fn interpolate_summer_winter(summer_value: f64, winter_value: f64, day: NaiveDate) -> f64 {
    summer_value + (winter_value - summer_value) * winter_factor(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_peak_summer_returns_summer_value() {
        // 2023-07-02 is day 183
        let peak = date(2023, 7, 2);
        assert_eq!(peak.ordinal(), PEAK_SUMMER_DAY);
        assert_eq!(interpolate_summer_winter(30.0, 29.0, peak), 30.0);
        assert_eq!(interpolate_summer_winter(25.0, 5.0, peak), 25.0);
    }

    #[test]
    fn test_six_months_from_peak_is_near_winter_value() {
        for day in [date(2023, 1, 1), date(2023, 12, 31)] {
            let value = interpolate_summer_winter(25.0, 5.0, day);
            // one day short of a full half-year at most
            assert!((value - 5.0).abs() <= 20.0 / 183.0 + 1e-9, "{day}: {value}");
        }
    }

    #[test]
    fn test_interpolation_is_symmetric_around_peak() {
        let before = date(2023, 7, 2) - chrono::Duration::days(40);
        let after = date(2023, 7, 2) + chrono::Duration::days(40);
        let a = interpolate_summer_winter(30.0, 29.0, before);
        let b = interpolate_summer_winter(30.0, 29.0, after);
        assert!((a - b).abs() < 1e-12);
        assert!(a < 30.0 && a > 29.0);
    }

    #[test]
    fn test_winter_factor_bounded() {
        let mut day = date(2024, 1, 1);
        while day.year() == 2024 {
            let f = winter_factor(day);
            assert!((0.0..=1.0).contains(&f));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(determine_season(date(2023, 1, 15)), Season::Winter);
        assert_eq!(determine_season(date(2023, 3, 20)), Season::Winter);
        assert_eq!(determine_season(date(2023, 3, 21)), Season::Spring);
        assert_eq!(determine_season(date(2023, 6, 21)), Season::Summer);
        assert_eq!(determine_season(date(2023, 9, 23)), Season::Fall);
        assert_eq!(determine_season(date(2023, 12, 21)), Season::Winter);
    }

    #[test]
    fn test_every_day_has_a_season() {
        let mut day = date(2024, 1, 1);
        let mut seen = std::collections::BTreeSet::new();
        while day.year() == 2024 {
            seen.insert(determine_season(day));
            day = day.succ_opt().unwrap();
        }
        assert_eq!(seen.len(), 4);
    }
}
