//! State of the date range entry form and its transitions.
//!
//! The state is plain data; every change goes through [`DateRangeFormState::apply`]
//! so the browser reducer and the headless session share one set of rules.

use chrono::NaiveDate;

use crate::dates::{day_count, format_date, midnight_timestamp, parse_date};
use crate::{AddDatesRequest, FormError, INVALID_DATES_WARNING};

/// Transient state owned by one form instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRangeFormState {
    /// Start date as entered (YYYY-MM-DD or empty)
    pub start: String,
    /// End date as entered (YYYY-MM-DD or empty)
    pub end: String,
    /// Earliest permitted start, once loaded
    pub reference_date: Option<NaiveDate>,
    pub is_fetching: bool,
    pub is_saving: bool,
    /// Validation warning blocking the last submission
    pub warning: Option<String>,
    /// Last asynchronous failure, cleared when the operation is retried
    pub error: Option<String>,
}

/// Transitions the UI can request
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    StartChanged(String),
    EndChanged(String),
    RefreshStarted,
    RefreshFinished(Result<NaiveDate, FormError>),
    SubmissionReviewed(SubmitDecision),
    SaveFinished(Result<(), FormError>),
}

/// What a submit attempt should do, given the current state
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// A date is missing; nothing happens and no warning is shown
    Incomplete,
    /// A fetch or save is in flight
    Busy,
    /// Validation failed with the given warning
    Rejected(String),
    /// Valid; this body should be posted
    Accepted(AddDatesRequest),
}

impl DateRangeFormState {
    /// Submit control is enabled only when idle and both dates are filled
    pub fn can_submit(&self) -> bool {
        !(self.is_saving || self.is_fetching || self.start.is_empty() || self.end.is_empty())
    }

    /// Day count for display, only when both dates are set
    pub fn day_count(&self) -> Option<i64> {
        if self.start.is_empty() || self.end.is_empty() {
            return None;
        }
        day_count(&self.start, &self.end)
    }

    /// Picker hint for the end input; not enforced on submit
    pub fn end_min(&self) -> &str {
        &self.start
    }

    /// Decide what submitting the current values would do, without changing state
    pub fn review_submission(&self) -> SubmitDecision {
        if self.start.is_empty() || self.end.is_empty() {
            return SubmitDecision::Incomplete;
        }
        if self.is_saving || self.is_fetching {
            return SubmitDecision::Busy;
        }

        let (start, end) = match (parse_date(&self.start), parse_date(&self.end)) {
            (Ok(start), Ok(end)) => (start, end),
            _ => return SubmitDecision::Rejected(INVALID_DATES_WARNING.to_string()),
        };

        if let Some(reference) = self.reference_date {
            if start < reference {
                return SubmitDecision::Rejected(INVALID_DATES_WARNING.to_string());
            }
        }

        SubmitDecision::Accepted(AddDatesRequest {
            start: midnight_timestamp(start),
            end: midnight_timestamp(end),
        })
    }

    /// Review the submission and record the outcome in one step
    pub fn begin_submit(&mut self) -> SubmitDecision {
        let decision = self.review_submission();
        self.apply(FormAction::SubmissionReviewed(decision.clone()));
        decision
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::StartChanged(value) => self.start = value,
            FormAction::EndChanged(value) => self.end = value,
            FormAction::RefreshStarted => {
                self.is_fetching = true;
                self.error = None;
            }
            FormAction::RefreshFinished(result) => {
                self.is_fetching = false;
                match result {
                    Ok(reference) => {
                        self.reference_date = Some(reference);
                        self.start = format_date(reference);
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
            FormAction::SubmissionReviewed(decision) => match decision {
                SubmitDecision::Incomplete | SubmitDecision::Busy => self.warning = None,
                SubmitDecision::Rejected(warning) => self.warning = Some(warning),
                SubmitDecision::Accepted(_) => {
                    self.warning = None;
                    self.error = None;
                    self.is_saving = true;
                }
            },
            FormAction::SaveFinished(result) => {
                self.is_saving = false;
                match result {
                    Ok(()) => {
                        self.start.clear();
                        self.end.clear();
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }
        }
    }
}
