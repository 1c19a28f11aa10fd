//! Best-effort claim extraction from compact three-segment credential tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server signs and verifies tokens; the client only peeks at the payload
//! segment to drive UI hints such as the role badge. A token that decodes
//! cleanly is NOT proof of validity, and nothing here ever fails loudly:
//! every malformed input collapses to `None`.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::GeneralPurpose;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

use crate::net::types::Role;

/// Issuers disagree on alphabet and padding, so every common variant is tried.
const PAYLOAD_ENGINES: [GeneralPurpose; 4] = [URL_SAFE_NO_PAD, URL_SAFE, STANDARD, STANDARD_NO_PAD];

/// Claims the sidebar shows. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub role: Option<Role>,
    pub email: Option<String>,
}

/// Decode the role claim of `token`.
///
/// Total: absent, malformed, or role-less tokens all yield `None`.
pub fn decode_role(token: Option<&str>) -> Option<Role> {
    decode_claims(token)?.role
}

/// Decode the display claims of `token`. Same totality as `decode_role`.
pub fn decode_claims(token: Option<&str>) -> Option<TokenClaims> {
    let payload = payload_segment(token?)?;
    let bytes = decode_segment(payload)?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    let object = value.as_object()?;
    Some(claims_from_object(object))
}

fn payload_segment(token: &str) -> Option<&str> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some(payload)
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    if segment.is_empty() {
        return None;
    }
    PAYLOAD_ENGINES.iter().find_map(|engine| engine.decode(segment).ok())
}

fn claims_from_object(object: &Map<String, Value>) -> TokenClaims {
    TokenClaims {
        role: object.get("role").and_then(Value::as_str).and_then(Role::parse),
        email: object.get("email").and_then(Value::as_str).map(str::to_owned),
    }
}
