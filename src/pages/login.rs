//! Login page: email + password exchanged for a session token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::ApiGateway;
use crate::state::login::{LoginForm, submit_login, validate_credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        let (identifier_value, secret_value) =
            match validate_credentials(&identifier.get_untracked(), &secret.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    form.update(|f| f.reject(message));
                    return;
                }
            };
        if !form.try_update(LoginForm::begin).unwrap_or(false) {
            return;
        }

        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_login(&gateway, &identifier_value, &secret_value).await {
                Ok(next) => {
                    let _ = form.try_update(|f| f.finish(Ok(())));
                    navigate(next, NavigateOptions::default());
                }
                Err(e) => {
                    let _ = form.try_update(|f| f.finish(Err(e.message)));
                }
            }
        });
    };

    let busy = move || form.with(|f| f.busy);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Control Panel"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        required
                        placeholder="admin@example.com"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
