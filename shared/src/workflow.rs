//! Fetch and save workflow around the form state.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::dates::{format_date, normalize_reference_date};
use crate::form::{DateRangeFormState, FormAction, SubmitDecision};
use crate::{AddDatesRequest, ApiError, FormError, LastDatesResponse};

/// The remote dates service. Futures are not `Send` so browser clients can implement it.
#[async_trait(?Send)]
pub trait DatesApi {
    /// `GET /dates/last`
    async fn last_dates(&self) -> Result<LastDatesResponse, ApiError>;

    /// `POST /dates/add`; any 2xx is success
    async fn add_dates(&self, request: &AddDatesRequest) -> Result<(), ApiError>;
}

/// Source of the current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Load the reference date, falling back to `today` when the service has none
pub async fn fetch_reference_date<A>(api: &A, today: NaiveDate) -> Result<NaiveDate, FormError>
where
    A: DatesApi + ?Sized,
{
    let response = api
        .last_dates()
        .await
        .map_err(|e| FormError::ReferenceDate(e.to_string()))?;
    let reference = normalize_reference_date(response.reference_start(), today)?;
    debug!(reference = %format_date(reference), "reference date loaded");
    Ok(reference)
}

/// Post a validated range
pub async fn save_range<A>(api: &A, request: &AddDatesRequest) -> Result<(), FormError>
where
    A: DatesApi + ?Sized,
{
    api.add_dates(request).await.map_err(|e| {
        warn!(error = %e, "saving date range failed");
        FormError::Save(e)
    })
}

/// Result of one submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Incomplete,
    Busy,
    Rejected(String),
    Saved(AddDatesRequest),
    Failed(FormError),
}

/// Load the reference date, reporting each transition through `dispatch`.
/// The fetching flag is cleared on every path.
pub async fn refresh_cycle<A, F>(api: &A, today: NaiveDate, mut dispatch: F) -> Result<NaiveDate, FormError>
where
    A: DatesApi + ?Sized,
    F: FnMut(FormAction),
{
    dispatch(FormAction::RefreshStarted);
    let result = fetch_reference_date(api, today).await;
    if let Err(err) = &result {
        warn!(error = %err, "reference date refresh failed");
    }
    dispatch(FormAction::RefreshFinished(result.clone()));
    result
}

/// Carry out a reviewed submission: record the review, post an accepted
/// range, record the save, and refresh the reference date after a success.
pub async fn submit_cycle<A, C, F>(
    api: &A,
    clock: &C,
    decision: SubmitDecision,
    mut dispatch: F,
) -> SubmitOutcome
where
    A: DatesApi + ?Sized,
    C: Clock + ?Sized,
    F: FnMut(FormAction),
{
    dispatch(FormAction::SubmissionReviewed(decision.clone()));

    let request = match decision {
        SubmitDecision::Incomplete => return SubmitOutcome::Incomplete,
        SubmitDecision::Busy => return SubmitOutcome::Busy,
        SubmitDecision::Rejected(warning) => {
            info!("submission rejected");
            return SubmitOutcome::Rejected(warning);
        }
        SubmitDecision::Accepted(request) => request,
    };

    let result = save_range(api, &request).await;
    dispatch(FormAction::SaveFinished(result.clone()));

    match result {
        Ok(()) => {
            info!(start = %request.start, end = %request.end, "date range saved");
            if let Err(err) = refresh_cycle(api, clock.today(), &mut dispatch).await {
                debug!(error = %err, "reference date kept after save");
            }
            SubmitOutcome::Saved(request)
        }
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Drives the form workflow without a UI
pub struct DateRangeSession<A, C> {
    api: A,
    clock: C,
    form: DateRangeFormState,
}

impl<A: DatesApi, C: Clock> DateRangeSession<A, C> {
    pub fn new(api: A, clock: C) -> Self {
        Self {
            api,
            clock,
            form: DateRangeFormState::default(),
        }
    }

    pub fn form(&self) -> &DateRangeFormState {
        &self.form
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_start(&mut self, value: impl Into<String>) {
        self.form.apply(FormAction::StartChanged(value.into()));
    }

    pub fn set_end(&mut self, value: impl Into<String>) {
        self.form.apply(FormAction::EndChanged(value.into()));
    }

    /// Fired on mount and after every successful save
    pub async fn refresh_reference_date(&mut self) -> Result<NaiveDate, FormError> {
        let form = &mut self.form;
        refresh_cycle(&self.api, self.clock.today(), |action| form.apply(action)).await
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let decision = self.form.review_submission();
        let form = &mut self.form;
        submit_cycle(&self.api, &self.clock, decision, |action| form.apply(action)).await
    }
}
