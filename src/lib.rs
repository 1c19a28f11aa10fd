//! # panel-client
//!
//! Leptos + WASM control panel for the marketplace/shipping integration:
//! connected store accounts, processed orders, integration errors, and
//! administrative users.
//!
//! The interesting part is the session lifecycle: `state::auth` holds the
//! token, `util::auth` gates routes on it, `net::gateway` attaches it to
//! every request and drops it when the server rejects it, and
//! `state::login` acquires it. Screens under `pages` are thin consumers.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, and mounting `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::ClientConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("config: {e}; using defaults");
    }

    leptos::mount::mount_to_body(move || {
        use crate::app::App;
        use leptos::prelude::*;

        view! { <App config=config/> }
    });
}
