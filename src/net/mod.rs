//! Networking modules for the panel's REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the only code that talks HTTP, `api` names the endpoints,
//! and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
