//! Adapter for the OpenWeather current-conditions shape.
//!
//! The payload is requested with metric units, so temperature converts
//! °C → °F and wind m/s → mph on the way into the model. This source has
//! no forecast array: the shaped result always carries empty `days`.

use serde::Deserialize;

use crate::model::{ForecastResult, WeatherSample};
use crate::shape::ShapeError;

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

pub(crate) fn mps_to_mph(mps: f64) -> f64 {
    mps * 2.236_94
}

/// Shape a raw OpenWeather current-conditions body into a
/// [`ForecastResult`] with empty `days`.
pub fn shape_current(raw: &str) -> Result<ForecastResult, ShapeError> {
    let parsed: OwResponse =
        serde_json::from_str(raw).map_err(|e| ShapeError::MalformedResponse(e.to_string()))?;

    let timestamp = chrono::DateTime::from_timestamp(parsed.dt, 0)
        .ok_or_else(|| {
            ShapeError::MalformedResponse(format!("unix timestamp {} out of range", parsed.dt))
        })?
        .naive_utc();

    let condition_text = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(ForecastResult {
        location_name: parsed.name,
        current: WeatherSample {
            timestamp,
            temperature_f: celsius_to_fahrenheit(parsed.main.temp),
            wind_mph: mps_to_mph(parsed.wind.speed),
            humidity_pct: parsed.main.humidity,
            condition_text,
        },
        days: Vec::new(),
    })
}
