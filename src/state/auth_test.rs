use super::*;
use std::sync::Arc;

use crate::util::credential_store::{CredentialStore, MemoryCredentialStore};
use crate::util::token::decode_role;
use base64::Engine as _;

fn admin_token() -> String {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"role":"admin"}"#);
    format!("aaa.{payload}.ccc")
}

fn assert_consistent(state: &AuthState) {
    assert_eq!(state.role(), decode_role(state.token()));
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_locked() {
    let state = AuthState::default();
    assert_eq!(state.token(), None);
    assert_eq!(state.role(), None);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_from_empty_store_is_locked() {
    let store = MemoryCredentialStore::default();
    let state = AuthState::restore(&store);
    assert_eq!(state, AuthState::default());
}

#[test]
fn restore_decodes_role_of_stored_token() {
    let store = MemoryCredentialStore::with_token(admin_token());
    let state = AuthState::restore(&store);
    assert_eq!(state.token(), Some(admin_token().as_str()));
    assert_eq!(state.role(), Some(Role::Admin));
    assert_consistent(&state);
}

#[test]
fn restore_treats_empty_slot_value_as_absent() {
    let store = MemoryCredentialStore::with_token("");
    assert!(!AuthState::restore(&store).is_authenticated());
}

#[test]
fn login_round_trips_token_and_persists_it() {
    let store = MemoryCredentialStore::default();
    let mut state = AuthState::default();
    state.login(&store, admin_token());
    assert_eq!(state.token(), Some(admin_token().as_str()));
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(store.read(), Some(admin_token()));
    assert_consistent(&state);
}

#[test]
fn login_with_malformed_token_keeps_raw_value_without_role() {
    let store = MemoryCredentialStore::default();
    let mut state = AuthState::default();
    state.login(&store, "garbage".to_owned());
    assert_eq!(state.token(), Some("garbage"));
    assert_eq!(state.role(), None);
    assert!(state.is_authenticated());
    assert_eq!(state.email(), None);
    assert_consistent(&state);
}

#[test]
fn email_follows_token_and_clears_on_logout() {
    let store = MemoryCredentialStore::default();
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"role":"admin","email":"ops@x.com"}"#);
    let mut state = AuthState::default();
    state.login(&store, format!("aaa.{payload}.ccc"));
    assert_eq!(state.email().as_deref(), Some("ops@x.com"));
    state.logout(&store);
    assert_eq!(state.email(), None);
}

#[test]
fn login_twice_overwrites() {
    let store = MemoryCredentialStore::default();
    let mut state = AuthState::default();
    state.login(&store, "first".to_owned());
    state.login(&store, admin_token());
    assert_eq!(state.token(), Some(admin_token().as_str()));
    assert_eq!(store.read(), Some(admin_token()));
}

#[test]
fn logout_clears_state_and_store() {
    let store = MemoryCredentialStore::default();
    let mut state = AuthState::default();
    state.login(&store, admin_token());
    assert!(state.logout(&store));
    assert_eq!(state, AuthState::default());
    assert_eq!(store.read(), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let store = MemoryCredentialStore::with_token(admin_token());
    let mut once = AuthState::restore(&store);
    once.logout(&store);

    let store_twice = MemoryCredentialStore::with_token(admin_token());
    let mut twice = AuthState::restore(&store_twice);
    assert!(twice.logout(&store_twice));
    assert!(!twice.logout(&store_twice));

    assert_eq!(once, twice);
    assert_eq!(store.read(), store_twice.read());
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_seeds_from_store_once() {
    let store = Arc::new(MemoryCredentialStore::with_token(admin_token()));
    let session = Session::new(store.clone());
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Admin));

    // Later store writes are not observed without login/logout.
    store.clear();
    assert_eq!(session.current_token(), Some(admin_token()));
}

#[test]
fn session_login_then_logout() {
    let store = Arc::new(MemoryCredentialStore::default());
    let session = Session::new(store.clone());
    assert!(!session.is_authenticated());

    session.login(admin_token());
    assert_eq!(session.current_token(), Some(admin_token()));
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(store.read(), Some(admin_token()));

    assert!(session.logout());
    assert!(!session.logout());
    assert_eq!(session.snapshot(), AuthState::default());
    assert_eq!(store.read(), None);
}
