//! Credential-entry flow: form state and the single login attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::login` owns the inputs; this module owns the rules. One exchange
//! may be outstanding at a time, and a failed exchange leaves the session
//! exactly as it was.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::exchange_credentials;
use crate::net::gateway::{Gateway, GatewayError, Transport};
use crate::state::auth::SessionHandle;
use crate::util::auth::HOME_PATH;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";

/// Submission state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// An exchange is in flight.
    pub busy: bool,
    /// Message from the last failed attempt.
    pub error: Option<String>,
}

impl LoginForm {
    /// Claim the form for a new attempt. Returns `false` while one is in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Release the form, recording the failure message if any.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        self.busy = false;
        self.error = outcome.err();
    }

    /// Reject input locally without starting an attempt.
    pub fn reject(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }
}

/// Trim the identifier and require both fields.
///
/// # Errors
///
/// Returns the inline message to show when either field is empty.
pub fn validate_credentials(identifier: &str, secret: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((identifier.to_owned(), secret.to_owned()))
}

/// Run one credential exchange and, on success, start the session.
///
/// Returns the path to navigate to next.
///
/// # Errors
///
/// Returns the gateway error; the session is not modified in that case.
pub async fn submit_login<T: Transport, S: SessionHandle>(
    gateway: &Gateway<T, S>,
    identifier: &str,
    secret: &str,
) -> Result<&'static str, GatewayError> {
    let token = exchange_credentials(gateway, identifier, secret).await?;
    gateway.session().login(token);
    Ok(HOME_PATH)
}
