//! Layout wrapping every protected screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluates the route guard for the current location on every navigation
//! and session change. Locked tabs get a redirect to `/login`; the requested
//! path is not remembered.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::state::auth::Session;
use crate::util::auth::{LOGIN_PATH, RouteDecision, route_decision};

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;

    let unlocked = Memo::new(move |_| {
        matches!(route_decision(&pathname.get(), &session.snapshot()), RouteDecision::Render(_))
    });

    view! {
        <Show when=move || unlocked.get() fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
            <div class="panel-layout">
                <Sidebar/>
                <main class="panel-main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
