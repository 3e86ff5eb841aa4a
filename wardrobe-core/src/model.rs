use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// What the caller wants fetched: a city and how many forecast days.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub days: u8,
}

impl ForecastRequest {
    pub fn new(city: impl Into<String>, days: u8) -> Self {
        Self { city: city.into(), days }
    }
}

/// One observed or forecast weather point, normalized to Fahrenheit/mph.
///
/// Timestamps are naive local times as reported by the source; shaping
/// guarantees they parsed successfully, so consumers never see an
/// unparsable time here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub timestamp: NaiveDateTime,
    pub temperature_f: f64,
    pub wind_mph: f64,
    pub humidity_pct: u8,
    pub condition_text: String,
}

/// Whole-day aggregate reported by the source alongside the hourly data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub max_temp_f: f64,
    pub min_temp_f: f64,
    pub avg_temp_f: f64,
    pub max_wind_mph: f64,
    pub avg_humidity_pct: u8,
    pub condition_text: String,
}

/// One calendar day of forecast.
///
/// `hours` are ascending by timestamp and all fall on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub summary: DaySummary,
    pub hours: Vec<WeatherSample>,
}

/// A complete shaped fetch result. Each fetch produces a fresh value that
/// fully replaces any prior one; nothing is merged or cached.
///
/// `days` is chronological with day 0 = today. An empty `days` means the
/// source had no forecast data ("no data yet"), which is distinct from an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub location_name: String,
    pub current: WeatherSample,
    pub days: Vec<DayForecast>,
}
