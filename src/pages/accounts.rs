//! Marketplace account slots and the connect flow for empty ones.
//!
//! The integration holds a fixed number of account slots. Linked accounts
//! fill the first slots in the order the backend lists them; the rest are
//! free and offer the connect flow.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{connect_account_url, fetch_accounts};
use crate::net::gateway::ApiGateway;
use crate::net::types::{LinkedAccount, display_id};
use crate::state::remote::Remote;
use crate::util::fetch::load_into;

pub const ACCOUNT_SLOT_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountSlot {
    Linked(LinkedAccount),
    /// Free slot; `suggested_name` is sent to the connect flow.
    Free { suggested_name: String },
}

/// Lay `accounts` out over the fixed slots. Rows beyond the slot count are
/// not shown.
pub fn account_slots(accounts: Vec<LinkedAccount>) -> Vec<AccountSlot> {
    let mut linked = accounts.into_iter();
    (0..ACCOUNT_SLOT_COUNT)
        .map(|index| match linked.next() {
            Some(account) => AccountSlot::Linked(account),
            None => AccountSlot::Free { suggested_name: suggested_store_name(index) },
        })
        .collect()
}

fn suggested_store_name(index: usize) -> String {
    format!("Tienda_{}", index + 1)
}

#[component]
pub fn AccountsPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let config = expect_context::<ClientConfig>();
    let accounts = RwSignal::new(Remote::<Vec<LinkedAccount>>::Loading);
    load_into(accounts, move || async move { fetch_accounts(&gateway).await });

    let api_base = StoredValue::new(config.api_base_url);

    view! {
        <section class="page">
            <h1>"Accounts"</h1>
            {move || match accounts.get() {
                Remote::Loading => view! { <p class="page__loading">"Loading accounts..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(linked) => {
                    let summary = format!("{} / {ACCOUNT_SLOT_COUNT} active accounts", linked.len().min(ACCOUNT_SLOT_COUNT));
                    view! {
                        <p class="page__summary">{summary}</p>
                        <ul class="account-grid">
                            {account_slots(linked)
                                .into_iter()
                                .enumerate()
                                .map(|(index, slot)| account_slot(index, slot, api_base.get_value()))
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

fn account_slot(index: usize, slot: AccountSlot, api_base: String) -> impl IntoView {
    let suggested_name = match slot {
        AccountSlot::Linked(account) => {
            let name = account.store_name.unwrap_or_default();
            let ml_id = account.ml_user_id.as_ref().map(display_id).unwrap_or_default();
            return view! {
                <li class="account-slot account-slot--connected">
                    <p class="account-slot__name">{name}</p>
                    <p class="account-slot__meta">{format!("ML id: {ml_id}")}</p>
                    <span class="account-slot__status">"Active"</span>
                </li>
            }
            .into_any();
        }
        AccountSlot::Free { suggested_name } => suggested_name,
    };

    let on_connect = move |_| {
        let url = connect_account_url(&api_base, &suggested_name);
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    };
    view! {
        <li class="account-slot">
            <p class="account-slot__name">{format!("Slot #{}", index + 1)}</p>
            <p class="account-slot__meta">"Not linked"</p>
            <button class="account-slot__connect" on:click=on_connect>
                "Connect"
            </button>
        </li>
    }
    .into_any()
}
