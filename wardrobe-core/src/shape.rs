//! Shaping: adapters from the raw provider payloads to the internal model.
//!
//! One adapter per source shape; nothing downstream of shaping ever
//! branches on which source produced a [`crate::model::ForecastResult`].

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

pub mod openweather;
pub mod weatherapi;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// Required fields missing or of the wrong type. The whole payload is
    /// rejected; no partial result is produced.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A single day/hour entry carried a timestamp that would not parse.
    /// The shaper drops the entry and continues.
    #[error("unparsable timestamp: {0:?}")]
    UnparsableTimestamp(String),
}

pub(crate) fn parse_day_date(raw: &str) -> Result<NaiveDate, ShapeError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ShapeError::UnparsableTimestamp(raw.to_string()))
}

pub(crate) fn parse_hour_time(raw: &str) -> Result<NaiveDateTime, ShapeError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map_err(|_| ShapeError::UnparsableTimestamp(raw.to_string()))
}
