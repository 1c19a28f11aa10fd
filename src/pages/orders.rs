//! Processed orders with their shipping status.

use leptos::prelude::*;

use crate::net::api::fetch_orders;
use crate::net::gateway::ApiGateway;
use crate::net::types::{Order, display_id};
use crate::state::remote::Remote;
use crate::util::fetch::load_into;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let orders = RwSignal::new(Remote::<Vec<Order>>::Loading);

    let refresh = move || {
        let gateway = gateway.clone();
        load_into(orders, move || async move { fetch_orders(&gateway).await });
    };
    refresh();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Orders"</h1>
                <button class="page__refresh" on:click=move |_| refresh() disabled=move || orders.with(Remote::is_loading)>
                    "Refresh"
                </button>
            </header>
            {move || match orders.get() {
                Remote::Loading => view! { <p class="page__loading">"Loading orders..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! { <p class="page__empty">"No orders yet."</p> }.into_any(),
                Remote::Ready(list) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Customer"</th>
                                <th>"Account"</th>
                                <th>"Tracking"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list.into_iter().map(order_row).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}

fn order_row(order: Order) -> impl IntoView {
    let store = order.store.and_then(|s| s.store_name).unwrap_or_else(|| "No account".to_owned());
    let order_id = display_id(&order.ml_order_id);
    view! {
        <tr>
            <td>{order_id}</td>
            <td>{order.customer_name}</td>
            <td>{store}</td>
            <td>{order.tracking.unwrap_or_else(|| "-".to_owned())}</td>
            <td>{order.status.to_uppercase()}</td>
        </tr>
    }
}
