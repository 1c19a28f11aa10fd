//! Administrative users: list, create, delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::api::{create_user, delete_user, fetch_users};
use crate::net::gateway::ApiGateway;
use crate::net::types::{NewUser, Role, User};
use crate::state::remote::Remote;
use crate::util::fetch::load_into;

/// Build the create-user payload from raw form fields.
fn build_new_user(email: &str, password: &str, role: &str) -> Result<NewUser, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter an email and a password.");
    }
    let role = Role::parse(role).ok_or("Pick a valid role.")?;
    Ok(NewUser { email: email.to_owned(), password: password.to_owned(), role })
}

#[cfg(feature = "csr")]
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message("Delete this user?").ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "csr"))]
fn confirm_delete() -> bool {
    false
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let gateway = StoredValue::new(expect_context::<ApiGateway>());
    let users = RwSignal::new(Remote::<Vec<User>>::Loading);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Admin.as_str().to_owned());
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let reload = move || {
        // Also runs after a create/delete completes, possibly after the page was left.
        let Some(gateway) = gateway.try_get_value() else {
            return;
        };
        load_into(users, move || async move { fetch_users(&gateway).await });
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let new_user = match build_new_user(&email.get_untracked(), &password.get_untracked(), &role.get_untracked()) {
            Ok(user) => user,
            Err(message) => {
                form_error.set(Some(message.to_owned()));
                return;
            }
        };
        submitting.set(true);
        form_error.set(None);
        let gateway = gateway.get_value();
        leptos::task::spawn_local(async move {
            match create_user(&gateway, &new_user).await {
                Ok(()) => {
                    let _ = email.try_set(String::new());
                    let _ = password.try_set(String::new());
                    reload();
                }
                Err(e) => {
                    let _ = form_error.try_set(Some(e.message));
                }
            }
            let _ = submitting.try_set(false);
        });
    };

    let on_delete = move |user_id: i64| {
        if !confirm_delete() {
            return;
        }
        let gateway = gateway.get_value();
        leptos::task::spawn_local(async move {
            match delete_user(&gateway, user_id).await {
                Ok(()) => reload(),
                Err(e) => {
                    let _ = form_error.try_set(Some(e.message));
                }
            }
        });
    };

    view! {
        <section class="page">
            <h1>"Users"</h1>
            <form class="user-form" on:submit=on_create>
                <input
                    type="email"
                    required
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    required
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <select prop:value=move || role.get() on:change=move |ev| role.set(event_target_value(&ev))>
                    {Role::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                        .collect_view()}
                </select>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create" }}
                </button>
            </form>
            <Show when=move || form_error.with(Option::is_some)>
                <p class="page__error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            {move || match users.get() {
                Remote::Loading => view! { <p class="page__loading">"Loading users..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! { <p class="page__empty">"No users."</p> }.into_any(),
                Remote::Ready(list) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Created"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|user| {
                                    let id = user.id;
                                    view! {
                                        <tr>
                                            <td>{user.email}</td>
                                            <td>{user.role}</td>
                                            <td>{user.created_at.unwrap_or_default()}</td>
                                            <td>
                                                <button class="data-table__delete" on:click=move |_| on_delete(id)>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}
