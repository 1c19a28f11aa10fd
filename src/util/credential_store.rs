//! Durable slot holding the raw credential token across page reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `state::auth` writes here. Views read the session, never the store.
//! Writes are visible to the next `read` in the same tab; other tabs only see
//! them when they next start up.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: quota or privacy-mode failures are
//! swallowed, and non-browser builds behave like an always-empty slot.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use std::sync::Mutex;

/// Storage contract for the current credential token. No validation, no I/O
/// beyond the slot itself.
pub trait CredentialStore: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// `localStorage` slot named by `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalCredentialStore {
    key: String,
}

impl LocalCredentialStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalCredentialStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("credential store: write to '{}' failed", self.key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-process slot for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn write(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
