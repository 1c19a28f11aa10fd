//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `login`, `remote`) so components depend
//! on small focused models and the rules stay testable without a browser.

pub mod auth;
pub mod login;
pub mod remote;
