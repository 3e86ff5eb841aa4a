//! Pure selection and display helpers over the shaped forecast model.
//!
//! "Now" is always caller-supplied so callers stay in control of the clock
//! and everything here is deterministic under test.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{DayForecast, WeatherSample};

/// Hours of `day` strictly after `now`, in order, at most `limit` of them.
///
/// Returns an empty vec when nothing qualifies. Shaping already dropped
/// entries with unparsable source timestamps, so every remaining hour is
/// comparable.
pub fn upcoming_hours<'a>(
    day: &'a DayForecast,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<&'a WeatherSample> {
    day.hours
        .iter()
        .filter(|hour| hour.timestamp > now)
        .take(limit)
        .collect()
}

/// Hour tile label, e.g. "3 PM".
pub fn hour_label(timestamp: NaiveDateTime) -> String {
    timestamp.format("%-I %p").to_string()
}

/// Day card header, e.g. "Monday 3/9/2026".
pub fn day_header(date: NaiveDate) -> String {
    date.format("%A %-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DaySummary;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("test timestamp")
    }

    fn hour(time: &str, temp: f64) -> WeatherSample {
        WeatherSample {
            timestamp: ts(time),
            temperature_f: temp,
            wind_mph: 5.0,
            humidity_pct: 60,
            condition_text: "Sunny".to_string(),
        }
    }

    fn day() -> DayForecast {
        DayForecast {
            date: NaiveDate::from_ymd_opt(2026, 3, 9).expect("test date"),
            summary: DaySummary {
                max_temp_f: 58.0,
                min_temp_f: 41.0,
                avg_temp_f: 50.0,
                max_wind_mph: 8.0,
                avg_humidity_pct: 55,
                condition_text: "Sunny".to_string(),
            },
            hours: vec![
                hour("2026-03-09 09:00", 45.0),
                hour("2026-03-09 12:00", 52.0),
                hour("2026-03-09 15:00", 58.0),
            ],
        }
    }

    #[test]
    fn all_hours_qualify_when_now_precedes_them() {
        let day = day();
        let hours = upcoming_hours(&day, ts("2026-03-09 00:00"), 6);
        assert_eq!(hours.len(), 3);
        assert_eq!(hours[0].timestamp, ts("2026-03-09 09:00"));
    }

    #[test]
    fn empty_when_now_is_after_every_hour() {
        let day = day();
        assert!(upcoming_hours(&day, ts("2026-03-09 23:00"), 6).is_empty());
    }

    #[test]
    fn hour_equal_to_now_is_excluded() {
        let day = day();
        let hours = upcoming_hours(&day, ts("2026-03-09 12:00"), 6);
        assert_eq!(hours.len(), 1);
        assert_eq!(hours[0].timestamp, ts("2026-03-09 15:00"));
    }

    #[test]
    fn limit_truncates_in_order() {
        let day = day();
        let hours = upcoming_hours(&day, ts("2026-03-09 00:00"), 2);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[1].timestamp, ts("2026-03-09 12:00"));
    }

    #[test]
    fn limit_zero_yields_empty() {
        let day = day();
        assert!(upcoming_hours(&day, ts("2026-03-09 00:00"), 0).is_empty());
    }

    #[test]
    fn hour_label_matches_the_tile_format() {
        assert_eq!(hour_label(ts("2026-03-09 15:00")), "3 PM");
        assert_eq!(hour_label(ts("2026-03-09 09:00")), "9 AM");
        assert_eq!(hour_label(ts("2026-03-09 00:00")), "12 AM");
    }

    #[test]
    fn day_header_matches_the_card_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("test date");
        assert_eq!(day_header(date), "Monday 3/9/2026");
    }
}
