//! Navigation rail with the role badge and the sign-out button.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::auth::{Session, SessionHandle};
use crate::util::auth::Screen;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        // The protected layout observes the cleared session and redirects.
        session.logout();
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Integration Panel"</div>
            <ul class="sidebar__links">
                {Screen::PROTECTED
                    .into_iter()
                    .map(|screen| {
                        let class = move || {
                            if Screen::from_path(&pathname.get()) == screen {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <li class=class>
                                <A href=screen.path()>{screen.title()}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">
                <Show when=move || session.email().is_some()>
                    <span class="sidebar__email">{move || session.email().unwrap_or_default()}</span>
                </Show>
                <Show when=move || session.role().is_some()>
                    <span class="sidebar__role">{move || session.role().map(Role::as_str).unwrap_or_default()}</span>
                </Show>
                <button class="sidebar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
