//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected::ProtectedLayout;
use crate::config::ClientConfig;
use crate::net::gateway::{ApiGateway, BrowserTransport, Gateway};
use crate::pages::{
    accounts::AccountsPage, dashboard::DashboardPage, errors::ErrorsPage, login::LoginPage, orders::OrdersPage,
    users::UsersPage,
};
use crate::state::auth::{Session, SharedCredentialStore};
use crate::util::auth::HOME_PATH;
use crate::util::credential_store::LocalCredentialStore;

/// Root application component.
///
/// Builds the tab's single `Session` from the credential store, wires the
/// gateway to it, and provides config, session, and gateway as context.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let store: SharedCredentialStore = Arc::new(LocalCredentialStore::new(config.token_storage_key.clone()));
    let session = Session::new(store);
    let gateway: ApiGateway = Gateway::new(BrowserTransport, session, config.api_base_url.clone());

    provide_context(config);
    provide_context(session);
    provide_context(gateway);

    view! {
        <Title text="Integration Panel"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("accounts") view=AccountsPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("errors") view=ErrorsPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
