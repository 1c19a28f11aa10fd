//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page fetches through the gateway on mount and renders a minimal list.
//! Only `login` is reachable without a session.

pub mod accounts;
pub mod dashboard;
pub mod errors;
pub mod login;
pub mod orders;
pub mod users;
