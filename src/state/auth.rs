//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is constructed once in `App`, seeded from the credential store,
//! and provided as context. The route guard, the gateway, and the login flow
//! all consume it; only `login`/`logout` mutate it.
//!
//! INVARIANT
//! =========
//! `role` is always `decode_role(token)`. The fields are private and every
//! mutator rebuilds both from the token, so the two cannot drift.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::util::credential_store::CredentialStore;
use crate::util::token::{decode_claims, decode_role};

pub type SharedCredentialStore = Arc<dyn CredentialStore>;

/// Current token plus the role derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
    role: Option<Role>,
}

impl AuthState {
    /// Seed from whatever the store holds. No network round-trip: a stale
    /// token counts as present until the server rejects it.
    pub fn restore(store: &dyn CredentialStore) -> Self {
        Self::from_token(store.read())
    }

    fn from_token(token: Option<String>) -> Self {
        // An empty slot value is treated like a missing one.
        let token = token.filter(|t| !t.is_empty());
        let role = decode_role(token.as_deref());
        Self { token, role }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Email claim of the token, for display. Decoded on demand.
    pub fn email(&self) -> Option<String> {
        decode_claims(self.token.as_deref())?.email
    }

    /// Token presence, not role validity, is what unlocks protected screens.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist `token` and replace the session with it. Repeated calls overwrite.
    pub fn login(&mut self, store: &dyn CredentialStore, token: String) {
        store.write(&token);
        *self = Self::from_token(Some(token));
    }

    /// Clear the store and the session. Returns whether a token was present.
    pub fn logout(&mut self, store: &dyn CredentialStore) -> bool {
        store.clear();
        let had_token = self.token.is_some();
        *self = Self::default();
        had_token
    }
}

/// Read/write access to the session used by the gateway and the login flow.
pub trait SessionHandle {
    /// Token to attach to the next request, read at call time.
    fn current_token(&self) -> Option<String>;
    fn login(&self, token: String);
    /// Returns `true` only when this call actually ended a session.
    fn logout(&self) -> bool;
}

impl<S: SessionHandle + ?Sized> SessionHandle for &S {
    fn current_token(&self) -> Option<String> {
        (**self).current_token()
    }

    fn login(&self, token: String) {
        (**self).login(token);
    }

    fn logout(&self) -> bool {
        (**self).logout()
    }
}

/// Reactive session context shared by every screen in the tab.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
    store: StoredValue<SharedCredentialStore>,
}

impl Session {
    pub fn new(store: SharedCredentialStore) -> Self {
        let initial = AuthState::restore(store.as_ref());
        log::info!(
            "session restored: authenticated={} role={}",
            initial.is_authenticated(),
            role_label(initial.role())
        );
        Self { state: RwSignal::new(initial), store: StoredValue::new(store) }
    }

    /// Tracked snapshot of the whole state.
    pub fn snapshot(&self) -> AuthState {
        self.state.get()
    }

    /// Tracked; re-runs guards and views on login/logout.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Tracked role projection for display.
    pub fn role(&self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    /// Tracked email projection for display.
    pub fn email(&self) -> Option<String> {
        self.state.with(AuthState::email)
    }
}

impl SessionHandle for Session {
    fn current_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    fn login(&self, token: String) {
        let store = self.store.get_value();
        self.state.update(|s| s.login(store.as_ref(), token));
        log::info!("session started: role={}", role_label(self.state.with_untracked(AuthState::role)));
    }

    fn logout(&self) -> bool {
        let store = self.store.get_value();
        let mut cleared = false;
        self.state.maybe_update(|s| {
            cleared = s.logout(store.as_ref());
            cleared
        });
        if cleared {
            log::info!("session ended");
        }
        cleared
    }
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map_or("none", Role::as_str)
}
