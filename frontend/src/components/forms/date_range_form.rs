use shared::DateRangeFormState;
use yew::prelude::*;

use crate::components::spinner::Spinner;

#[derive(Properties, PartialEq)]
pub struct DateRangeEntryFormProps {
    // Form state
    pub state: DateRangeFormState,

    // Event handlers
    pub on_start_change: Callback<Event>,
    pub on_end_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(DateRangeEntryForm)]
pub fn date_range_entry_form(props: &DateRangeEntryFormProps) -> Html {
    let state = &props.state;

    html! {
        <form class="date-range-form" method="POST" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            <div class="form-group">
                <label for="start">{"Start"}</label>
                <input
                    type="date"
                    id="start"
                    name="start"
                    required={true}
                    value={state.start.clone()}
                    onchange={props.on_start_change.clone()}
                />
            </div>

            <div class="form-group">
                <label for="end">{"End"}</label>
                // min is a picker hint only; an earlier end is still submitted
                <input
                    type="date"
                    id="end"
                    name="end"
                    required={true}
                    min={state.end_min().to_string()}
                    value={state.end.clone()}
                    onchange={props.on_end_change.clone()}
                />
            </div>

            {if let Some(days) = state.day_count() {
                html! {
                    <div class="day-count">
                        {format!("Duration in days: {}", days)}
                    </div>
                }
            } else { html! {} }}

            {if let Some(warning) = state.warning.as_ref() {
                html! {
                    <div class="form-message warning">
                        {warning}
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = state.error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled={!state.can_submit()}
            >
                {if state.is_saving { html! { <Spinner /> } } else { html! {} }}
                {"OK"}
            </button>
        </form>
    }
}
