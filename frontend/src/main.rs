use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::DateRangeEntryForm;
use hooks::use_date_range_form;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let form = use_date_range_form(&api_client);

    html! {
        <main class="main">
            <div class="container">
                <h2 class="page-title">{"Playground"}</h2>

                <section class="date-range-section">
                    <DateRangeEntryForm
                        state={form.state}
                        on_start_change={form.actions.on_start_change}
                        on_end_change={form.actions.on_end_change}
                        on_submit={form.actions.on_submit}
                    />
                </section>
            </div>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
