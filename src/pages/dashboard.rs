//! Dashboard with the integration's headline counters.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::fetch_stats;
use crate::net::gateway::ApiGateway;
use crate::net::types::Stats;
use crate::state::remote::Remote;
use crate::util::auth::Screen;
use crate::util::fetch::load_into;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let stats = RwSignal::new(Remote::<Stats>::Loading);
    load_into(stats, move || async move { fetch_stats(&gateway).await });

    let card = move |title: &'static str, screen: Screen, value: fn(&Stats) -> u32| {
        view! {
            <A href=screen.path()>
                <div class="stat-card">
                    <p class="stat-card__title">{title}</p>
                    <p class="stat-card__value">
                        {move || stats.with(|s| s.ready().map(|s| value(s).to_string()).unwrap_or_else(|| "-".to_owned()))}
                    </p>
                </div>
            </A>
        }
    };

    view! {
        <section class="page">
            <h1>"Dashboard"</h1>
            <Show when=move || stats.with(|s| s.error().is_some())>
                <p class="page__error">{move || stats.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <div class="stat-grid">
                {card("Connected accounts", Screen::Accounts, |s| s.active_accounts)}
                {card("Labels today", Screen::Orders, |s| s.labels_today)}
                {card("Errors (24h)", Screen::Errors, |s| s.recent_errors)}
            </div>
        </section>
    }
}
