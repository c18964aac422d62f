use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod dates;
pub mod form;
pub mod workflow;

pub use dates::{day_count, format_date, midnight_timestamp, normalize_reference_date, parse_date, DateError};
pub use form::{DateRangeFormState, FormAction, SubmitDecision};
pub use workflow::{
    fetch_reference_date, refresh_cycle, save_range, submit_cycle, Clock, DateRangeSession, DatesApi,
    SubmitOutcome,
};

/// Base URL of the dates service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Path returning the most recent reference date
pub const LAST_DATES_PATH: &str = "/dates/last";

/// Path accepting a new date range
pub const ADD_DATES_PATH: &str = "/dates/add";

/// Warning shown when the start date falls before the reference date
pub const INVALID_DATES_WARNING: &str = "Invalid dates";

/// Message shown when saving a range fails
pub const SAVE_FAILED_MESSAGE: &str = "Something went wrong";

/// Response of `GET /dates/last`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastDatesResponse {
    /// Start of the most recent entry. Missing, null or blank means "no entry yet"
    #[serde(rename = "refStart", default)]
    pub ref_start: Option<String>,
}

impl LastDatesResponse {
    /// The reference start, with blank strings treated as absent
    pub fn reference_start(&self) -> Option<&str> {
        self.ref_start
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Body of `POST /dates/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDatesRequest {
    /// Range start as an ISO-8601 timestamp (midnight, UTC, millisecond precision)
    pub start: String,
    /// Range end as an ISO-8601 timestamp (midnight, UTC, millisecond precision)
    pub end: String,
}

/// Failures talking to the dates service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
}

/// Failures surfaced to the form after an asynchronous operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// The reference date could not be loaded or understood
    #[error("Unable to load the reference date: {0}")]
    ReferenceDate(String),
    /// Saving the range failed; the cause is kept for logging
    #[error("Something went wrong")]
    Save(#[source] ApiError),
}

impl From<DateError> for FormError {
    fn from(err: DateError) -> Self {
        FormError::ReferenceDate(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_dates_response_with_value() {
        let response: LastDatesResponse =
            serde_json::from_str(r#"{"refStart":"2024-01-10"}"#).unwrap();
        assert_eq!(response.reference_start(), Some("2024-01-10"));
    }

    #[test]
    fn test_last_dates_response_empty_variants() {
        let blank: LastDatesResponse = serde_json::from_str(r#"{"refStart":""}"#).unwrap();
        assert_eq!(blank.reference_start(), None);

        let null: LastDatesResponse = serde_json::from_str(r#"{"refStart":null}"#).unwrap();
        assert_eq!(null.reference_start(), None);

        let missing: LastDatesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.reference_start(), None);

        let spaces: LastDatesResponse = serde_json::from_str(r#"{"refStart":"   "}"#).unwrap();
        assert_eq!(spaces.reference_start(), None);
    }

    #[test]
    fn test_add_dates_request_wire_format() {
        let request = AddDatesRequest {
            start: "2024-01-10T00:00:00.000Z".to_string(),
            end: "2024-01-12T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": "2024-01-10T00:00:00.000Z",
                "end": "2024-01-12T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_save_error_message_is_generic() {
        let err = FormError::Save(ApiError::Status { status: 500, body: "boom".to_string() });
        assert_eq!(err.to_string(), SAVE_FAILED_MESSAGE);
        assert_eq!(
            std::error::Error::source(&err).map(|e| e.to_string()),
            Some("Server error 500: boom".to_string())
        );
    }
}
