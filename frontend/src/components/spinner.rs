use yew::prelude::*;

/// Inline loading indicator shown inside buttons
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="spinner" role="status" aria-label="Loading"></span>
    }
}
