//! Integration error log with the payload that failed processing.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use leptos::prelude::*;

use crate::net::api::fetch_error_logs;
use crate::net::gateway::ApiGateway;
use crate::net::types::ErrorLog;
use crate::state::remote::Remote;
use crate::util::fetch::load_into;

/// Pretty-print a stored payload; text that is not JSON is shown as-is.
fn pretty_payload(raw: Option<&str>) -> String {
    let raw = raw.unwrap_or("{}");
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| raw.to_owned())
}

#[component]
pub fn ErrorsPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let logs = RwSignal::new(Remote::<Vec<ErrorLog>>::Loading);
    load_into(logs, move || async move { fetch_error_logs(&gateway).await });

    view! {
        <section class="page">
            <h1>"Errors"</h1>
            {move || match logs.get() {
                Remote::Loading => view! { <p class="page__loading">"Loading errors..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! { <p class="page__empty">"No errors recorded."</p> }.into_any(),
                Remote::Ready(list) => view! {
                    <ul class="error-list">
                        {list
                            .into_iter()
                            .map(|entry| {
                                let payload = pretty_payload(entry.payload.as_deref());
                                view! {
                                    <li class="error-entry">
                                        <h3>{entry.message}</h3>
                                        <p class="error-entry__time">{entry.created_at.unwrap_or_default()}</p>
                                        <pre class="error-entry__payload">{payload}</pre>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
