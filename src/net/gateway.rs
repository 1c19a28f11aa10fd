//! Single outbound request path for every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never build HTTP requests themselves. The gateway reads the
//! session token at call time, attaches it as a bearer credential, and folds
//! transport and server failures into one `GatewayError` shape.
//!
//! ERROR HANDLING
//! ==============
//! - Transport failure: generic message, session untouched.
//! - 401/403 on an authenticated call: forced logout, at most once per call,
//!   and only if the rejected token is still the current one.
//! - 401/403 on the public credential exchange: plain error, no logout.
//! - Nothing is retried; callers own any retry policy.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::ErrorBody;
use crate::state::auth::{Session, SessionHandle};

pub const UNREACHABLE_MESSAGE: &str = "could not reach server";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "unexpected response from server";

/// Gateway wired to the browser's fetch and the tab's session.
pub type ApiGateway = Gateway<BrowserTransport, Session>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Status and raw body text, whatever the status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client seam. An `Err` means no response was received at all.
pub trait Transport {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, String>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, String>> {
        (**self).execute(request)
    }
}

/// `fetch` via `gloo-net`; unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, String> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = match request.body {
                Some(body) => builder.json(&body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err("not available outside the browser".to_owned())
        }
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Failure classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response received.
    Transport,
    /// 401 or 403: the server rejected the credential.
    Unauthorized(u16),
    /// Any other 4xx.
    Client(u16),
    /// 5xx or any other non-success status.
    Server(u16),
    /// Success status with a body that did not match the expected shape.
    Decode,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: ErrorKind,
    /// Human-readable, suitable for showing inline.
    pub message: String,
}

impl GatewayError {
    pub fn transport() -> Self {
        Self { kind: ErrorKind::Transport, message: UNREACHABLE_MESSAGE.to_owned() }
    }

    pub fn decode() -> Self {
        Self { kind: ErrorKind::Decode, message: UNEXPECTED_RESPONSE_MESSAGE.to_owned() }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, ErrorKind::Unauthorized(_))
    }
}

/// Classify a status code. `None` for 2xx.
pub fn classify(status: u16) -> Option<ErrorKind> {
    match status {
        200..=299 => None,
        401 | 403 => Some(ErrorKind::Unauthorized(status)),
        400..=499 => Some(ErrorKind::Client(status)),
        _ => Some(ErrorKind::Server(status)),
    }
}

/// Build the error for a failed response, preferring the server's `error` field.
pub fn error_from_response(kind: ErrorKind, body: &str) -> GatewayError {
    let message = server_message(body).unwrap_or_else(|| UNREACHABLE_MESSAGE.to_owned());
    GatewayError { kind, message }
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}

fn parse_success_body(body: &str) -> Result<Value, GatewayError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|_| GatewayError::decode())
}

#[derive(Clone)]
pub struct Gateway<T, S> {
    transport: T,
    session: S,
    base_url: Arc<str>,
}

impl<T: Transport, S: SessionHandle> Gateway<T, S> {
    pub fn new(transport: T, session: S, base_url: impl Into<Arc<str>>) -> Self {
        Self { transport, session, base_url: base_url.into() }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Authenticated request. A rejection logs the session out.
    ///
    /// # Errors
    ///
    /// Returns a `GatewayError` for transport failures, non-2xx statuses, and
    /// undecodable success bodies.
    pub async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, GatewayError> {
        let sent_token = self.session.current_token();
        let request = ApiRequest { method, url: self.url(path), bearer: sent_token.clone(), body };
        let result = self.dispatch(request).await;
        if let Err(err) = &result {
            if err.is_rejection() {
                self.reject_session(sent_token.as_deref(), path);
            }
        }
        result
    }

    /// Unauthenticated request for the credential exchange: no bearer, and a
    /// rejection is an ordinary error.
    ///
    /// # Errors
    ///
    /// Same failure shapes as [`Gateway::send`].
    pub async fn send_public(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, GatewayError> {
        let request = ApiRequest { method, url: self.url(path), bearer: None, body };
        self.dispatch(request).await
    }

    /// # Errors
    ///
    /// See [`Gateway::send`]; a body of the wrong shape is `ErrorKind::Decode`.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, GatewayError> {
        let value = self.send(Method::Get, path, None).await?;
        serde_json::from_value(value).map_err(|_| GatewayError::decode())
    }

    /// # Errors
    ///
    /// See [`Gateway::get_json`].
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, GatewayError> {
        let body = serde_json::to_value(body).map_err(|_| GatewayError::decode())?;
        let value = self.send(Method::Post, path, Some(body)).await?;
        serde_json::from_value(value).map_err(|_| GatewayError::decode())
    }

    /// # Errors
    ///
    /// See [`Gateway::send`]; the response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let method = request.method;
        let url = request.url.clone();
        let resp = self.transport.execute(request).await.map_err(|e| {
            log::warn!("gateway: {} {url} unreachable: {e}", method.as_str());
            GatewayError::transport()
        })?;
        if let Some(kind) = classify(resp.status) {
            log::warn!("gateway: {} {url} failed with status {}", method.as_str(), resp.status);
            return Err(error_from_response(kind, &resp.body));
        }
        parse_success_body(&resp.body).inspect_err(|_| {
            log::warn!("gateway: {} {url} returned an undecodable body", method.as_str());
        })
    }

    fn reject_session(&self, sent_token: Option<&str>, path: &str) {
        // A session established after this request went out is not the one
        // the server rejected.
        if self.session.current_token().as_deref() != sent_token {
            log::debug!("gateway: ignoring rejection of a replaced session on {path}");
            return;
        }
        if self.session.logout() {
            log::warn!("gateway: session rejected on {path}; signed out");
        }
    }
}
