//! Fetch-on-mount glue between the gateway and a screen's signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens may be left before their request completes. Results are written
//! with `try_set`, so a disposed signal silently drops them.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::gateway::GatewayError;
use crate::state::remote::Remote;

/// Mark `target` as loading and fill it with the outcome of `fetch`.
pub fn load_into<T, F, Fut>(target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, GatewayError>> + 'static,
{
    if target.try_set(Remote::Loading).is_some() {
        return;
    }
    leptos::task::spawn_local(async move {
        let outcome = Remote::from(fetch().await);
        if target.try_set(outcome).is_some() {
            log::debug!("fetch: screen left before response; result dropped");
        }
    });
}
