//! Adapter for the WeatherAPI.com `forecast.json` shape.
//!
//! Temperatures arrive in Fahrenheit and wind in mph, so no unit
//! conversion happens here.

use serde::Deserialize;

use crate::model::{DayForecast, DaySummary, ForecastResult, WeatherSample};
use crate::shape::{ShapeError, parse_day_date, parse_hour_time};

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_f: f64,
    wind_mph: f64,
    humidity: u8,
    condition: WaCondition,
    #[serde(default)]
    last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_f: f64,
    mintemp_f: f64,
    avgtemp_f: f64,
    maxwind_mph: f64,
    avghumidity: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_f: f64,
    #[serde(default)]
    wind_mph: f64,
    #[serde(default)]
    humidity: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    day: WaDay,
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

/// Shape a raw `forecast.json` body into a [`ForecastResult`].
///
/// Fails with [`ShapeError::MalformedResponse`] when the payload is
/// structurally incomplete. A day or hour whose timestamp will not parse
/// is dropped with a warning, never fatal. Hours are re-sorted ascending
/// within their day, and an hour dated outside its day is dropped.
/// Deterministic and idempotent for a fixed input.
pub fn shape_forecast(raw: &str) -> Result<ForecastResult, ShapeError> {
    let parsed: WaResponse =
        serde_json::from_str(raw).map_err(|e| ShapeError::MalformedResponse(e.to_string()))?;

    let current_time = current_timestamp(&parsed)?;
    let current = WeatherSample {
        timestamp: current_time,
        temperature_f: parsed.current.temp_f,
        wind_mph: parsed.current.wind_mph,
        humidity_pct: parsed.current.humidity,
        condition_text: parsed.current.condition.text,
    };

    let mut days = Vec::with_capacity(parsed.forecast.forecastday.len());
    // Days stay in source order; only hours get re-sorted.
    for raw_day in parsed.forecast.forecastday {
        let date = match parse_day_date(&raw_day.date) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!("dropping forecast day: {e}");
                continue;
            }
        };

        let mut hours = Vec::with_capacity(raw_day.hour.len());
        for raw_hour in raw_day.hour {
            let timestamp = match parse_hour_time(&raw_hour.time) {
                Ok(timestamp) => timestamp,
                Err(e) => {
                    tracing::warn!("dropping hour entry: {e}");
                    continue;
                }
            };
            if timestamp.date() != date {
                tracing::warn!("dropping hour entry dated {} under day {date}", timestamp.date());
                continue;
            }
            hours.push(WeatherSample {
                timestamp,
                temperature_f: raw_hour.temp_f,
                wind_mph: raw_hour.wind_mph,
                humidity_pct: raw_hour.humidity,
                condition_text: raw_hour.condition.text,
            });
        }
        hours.sort_by_key(|hour| hour.timestamp);

        days.push(DayForecast {
            date,
            summary: DaySummary {
                max_temp_f: raw_day.day.maxtemp_f,
                min_temp_f: raw_day.day.mintemp_f,
                avg_temp_f: raw_day.day.avgtemp_f,
                max_wind_mph: raw_day.day.maxwind_mph,
                avg_humidity_pct: raw_day.day.avghumidity.round() as u8,
                condition_text: raw_day.day.condition.text,
            },
            hours,
        });
    }

    Ok(ForecastResult { location_name: parsed.location.name, current, days })
}

/// The current sample's timestamp: `current.last_updated`, then
/// `location.localtime`, then midnight of the first forecast day.
fn current_timestamp(parsed: &WaResponse) -> Result<chrono::NaiveDateTime, ShapeError> {
    if let Some(raw) = parsed.current.last_updated.as_deref()
        && let Ok(timestamp) = parse_hour_time(raw)
    {
        return Ok(timestamp);
    }
    if let Some(raw) = parsed.location.localtime.as_deref()
        && let Ok(timestamp) = parse_hour_time(raw)
    {
        return Ok(timestamp);
    }
    if let Some(raw_day) = parsed.forecast.forecastday.first()
        && let Ok(date) = parse_day_date(&raw_day.date)
    {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }

    Err(ShapeError::MalformedResponse(
        "no usable timestamp for current conditions".to_string(),
    ))
}
