//! Calendar-date helpers for the date range form.
//!
//! Form inputs carry `YYYY-MM-DD` strings; the service speaks ISO-8601
//! timestamps. Date-only values are taken as midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("'{0}' is not a valid date")]
    Invalid(String),
}

/// Parse a `YYYY-MM-DD` string
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DateError::Invalid(value.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ISO-8601 timestamp for midnight UTC of `date`, e.g. `2024-01-10T00:00:00.000Z`
pub fn midnight_timestamp(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", format_date(date))
}

/// Turn the service's `refStart` into a calendar date.
///
/// `None` falls back to `today`. Accepts plain dates, RFC 3339 timestamps
/// (the UTC date is kept) and naive timestamps.
pub fn normalize_reference_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(today);
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| DateError::Invalid(raw.to_string()))
}

/// Whole days from `start` to `end`; negative when `end` comes first.
/// `None` unless both are valid dates.
pub fn day_count(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start).ok()?;
    let end = parse_date(end).ok()?;
    Some((end - start).num_days())
}
