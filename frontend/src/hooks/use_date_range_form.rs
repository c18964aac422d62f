use std::rc::Rc;

use shared::{format_date, refresh_cycle, submit_cycle, Clock, DateRangeFormState, FormAction, SubmitOutcome};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;

const COMPONENT: &str = "date-range-form";

/// Reducer wrapper so async completions apply to the latest form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormStore {
    pub form: DateRangeFormState,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        form.apply(action);
        Rc::new(Self { form })
    }
}

pub struct UseDateRangeFormResult {
    pub state: DateRangeFormState,
    pub actions: UseDateRangeFormActions,
}

#[derive(Clone)]
pub struct UseDateRangeFormActions {
    pub on_start_change: Callback<Event>,
    pub on_end_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

/// Hook owning the date range form: loads the reference date on mount,
/// validates and saves on submit, and refreshes after each successful save.
#[hook]
pub fn use_date_range_form(api_client: &ApiClient) -> UseDateRangeFormResult {
    let store = use_reducer(FormStore::default);

    let refresh_reference_date = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let result = refresh_cycle(&api_client, BrowserClock.today(), |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                match result {
                    Ok(reference) => Logger::debug_with_component(
                        COMPONENT,
                        &format!("Reference date: {}", format_date(reference)),
                    ),
                    Err(e) => Logger::error_with_component(COMPONENT, &e.to_string()),
                }
            });
        })
    };

    // Load the reference date on mount
    use_effect_with((), {
        let refresh_reference_date = refresh_reference_date.clone();
        move |_| {
            refresh_reference_date.emit(());
            || ()
        }
    });

    let on_start_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::StartChanged(input.value()));
        })
    };

    let on_end_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::EndChanged(input.value()));
        })
    };

    let on_submit = {
        let store = store.clone();
        let api_client = api_client.clone();

        Callback::from(move |_| {
            let decision = store.form.review_submission();
            let api_client = api_client.clone();
            let dispatcher = store.dispatcher();

            spawn_local(async move {
                let outcome = submit_cycle(&api_client, &BrowserClock, decision, |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                match outcome {
                    SubmitOutcome::Saved(request) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Saved range {} -> {}", request.start, request.end),
                    ),
                    SubmitOutcome::Rejected(warning) => Logger::warn_with_component(COMPONENT, &warning),
                    SubmitOutcome::Failed(e) => Logger::error_with_component(COMPONENT, &format!("{:?}", e)),
                    SubmitOutcome::Incomplete | SubmitOutcome::Busy => {}
                }
            });
        })
    };

    UseDateRangeFormResult {
        state: store.form.clone(),
        actions: UseDateRangeFormActions {
            on_start_change,
            on_end_change,
            on_submit,
        },
    }
}
