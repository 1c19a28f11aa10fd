//! Client configuration baked in at build time.
//!
//! A browser has no process environment, so values come from `option_env!`
//! when the WASM bundle is compiled:
//! - `PANEL_API_BASE_URL`: backend origin; empty means same-origin (default)
//! - `PANEL_TOKEN_KEY`: `localStorage` slot for the credential (default `token`)
//! - `PANEL_LOG_LEVEL`: `error`..`trace` (default `info`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown PANEL_LOG_LEVEL: {0}")]
    LogLevel(String),
    #[error("PANEL_TOKEN_KEY must not be blank")]
    BlankTokenKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing `/`.
    pub api_base_url: String,
    pub token_storage_key: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), token_storage_key: DEFAULT_TOKEN_KEY.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build from the compile-time environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_values`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("PANEL_API_BASE_URL"), option_env!("PANEL_TOKEN_KEY"), option_env!("PANEL_LOG_LEVEL"))
    }

    /// Build from raw values.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown log level or a blank token key.
    pub fn from_values(
        api_base_url: Option<&str>,
        token_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        let token_storage_key = match token_key {
            None => DEFAULT_TOKEN_KEY.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::BlankTokenKey),
            Some(raw) => raw.trim().to_owned(),
        };
        let log_level = parse_log_level(log_level)?;
        Ok(Self { api_base_url, token_storage_key, log_level })
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(other) => log::Level::from_str(other).map_err(|_| ConfigError::LogLevel(other.to_owned())),
    }
}
