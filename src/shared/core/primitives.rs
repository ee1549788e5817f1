// Small value helpers shared across bounded contexts.
//
// Purpose
// - Parse the ISO calendar dates and HH:MM clock times used on the wire.
// - Provide serde adapters so handlers never format dates by hand.

use chrono::{Local, NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, PrimitiveError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| PrimitiveError::InvalidDate(raw.to_string()))
}

/// Parses an optional query parameter, falling back to the local calendar date.
pub fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate, PrimitiveError> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(today()),
    }
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, PrimitiveError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| PrimitiveError::InvalidTime(raw.to_string()))
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serde adapter for `NaiveTime` as `HH:MM`.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(D::Error::custom)
    }
}
