//! Build- and run-time configuration.
//!
//! The API base URL is baked into the WASM bundle at compile time; the SSR
//! host reads its listen port from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `JOBPORTAL_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Base URL of the job-board REST API.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("JOBPORTAL_API_URL").filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_API_URL)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer between 0 and 65535")]
    InvalidPort { value: String },
}

/// SSR host settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPort` when `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value })?,
        };
        Ok(Self { port })
    }

    /// Build from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
