//! REST endpoint helpers layered on the gateway.
//!
//! Every helper except `exchange_credentials` goes through the authenticated
//! path, so a rejected token anywhere signs the tab out.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{Gateway, GatewayError, Method, Transport};
use super::types::{LinkedAccount, ErrorLog, LoginRequest, LoginResponse, NewUser, Order, Stats, User};
use crate::state::auth::SessionHandle;

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const STATS_ENDPOINT: &str = "/api/stats";
pub const ACCOUNTS_ENDPOINT: &str = "/api/accounts";
pub const ORDERS_ENDPOINT: &str = "/api/orders";
pub const ERRORS_ENDPOINT: &str = "/api/errors";
pub const USERS_ENDPOINT: &str = "/api/users";
pub const ACCOUNT_CONNECT_PATH: &str = "/auth/ml/connect";

fn user_endpoint(user_id: i64) -> String {
    format!("{USERS_ENDPOINT}/{user_id}")
}

/// Browser destination that starts the marketplace OAuth flow for a new
/// account slot named `store_name`.
pub fn connect_account_url(api_base_url: &str, store_name: &str) -> String {
    format!("{api_base_url}{ACCOUNT_CONNECT_PATH}?nombre={}", urlencoding::encode(store_name))
}

/// Exchange an identifier/secret pair for a token via `POST /api/login`.
///
/// # Errors
///
/// Returns the gateway error unchanged; a missing `token` field is a decode
/// error.
pub async fn exchange_credentials<T: Transport, S: SessionHandle>(
    gateway: &Gateway<T, S>,
    identifier: &str,
    secret: &str,
) -> Result<String, GatewayError> {
    let request = LoginRequest { identifier: identifier.to_owned(), secret: secret.to_owned() };
    let body = serde_json::to_value(&request).map_err(|_| GatewayError::decode())?;
    let value = gateway.send_public(Method::Post, LOGIN_ENDPOINT, Some(body)).await?;
    let resp: LoginResponse = serde_json::from_value(value).map_err(|_| GatewayError::decode())?;
    Ok(resp.token)
}

/// # Errors
///
/// See [`Gateway::get_json`].
pub async fn fetch_stats<T: Transport, S: SessionHandle>(gateway: &Gateway<T, S>) -> Result<Stats, GatewayError> {
    gateway.get_json(STATS_ENDPOINT).await
}

/// # Errors
///
/// See [`Gateway::get_json`].
pub async fn fetch_accounts<T: Transport, S: SessionHandle>(
    gateway: &Gateway<T, S>,
) -> Result<Vec<LinkedAccount>, GatewayError> {
    gateway.get_json(ACCOUNTS_ENDPOINT).await
}

/// # Errors
///
/// See [`Gateway::get_json`].
pub async fn fetch_orders<T: Transport, S: SessionHandle>(gateway: &Gateway<T, S>) -> Result<Vec<Order>, GatewayError> {
    gateway.get_json(ORDERS_ENDPOINT).await
}

/// # Errors
///
/// See [`Gateway::get_json`].
pub async fn fetch_error_logs<T: Transport, S: SessionHandle>(
    gateway: &Gateway<T, S>,
) -> Result<Vec<ErrorLog>, GatewayError> {
    gateway.get_json(ERRORS_ENDPOINT).await
}

/// # Errors
///
/// See [`Gateway::get_json`].
pub async fn fetch_users<T: Transport, S: SessionHandle>(gateway: &Gateway<T, S>) -> Result<Vec<User>, GatewayError> {
    gateway.get_json(USERS_ENDPOINT).await
}

/// Create an administrative user. The response body is not used.
///
/// # Errors
///
/// See [`Gateway::post_json`].
pub async fn create_user<T: Transport, S: SessionHandle>(
    gateway: &Gateway<T, S>,
    user: &NewUser,
) -> Result<(), GatewayError> {
    let _: serde_json::Value = gateway.post_json(USERS_ENDPOINT, user).await?;
    Ok(())
}

/// # Errors
///
/// See [`Gateway::delete`].
pub async fn delete_user<T: Transport, S: SessionHandle>(gateway: &Gateway<T, S>, user_id: i64) -> Result<(), GatewayError> {
    gateway.delete(&user_endpoint(user_id)).await
}
