//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Screens never see raw HTTP statuses. Every response is classified once,
//! here, into unreachable / unauthorized / rejected (4xx) / server fault (5xx)
//! / undecodable, keeping the backend's `message` text verbatim so it can be
//! shown inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure to get any HTTP response at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http transport not available outside the browser")]
    Unavailable,
}

/// Classified failure of one API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("cannot reach server: {0}")]
    Unreachable(String),
    #[error("authorization expired")]
    Unauthorized { message: Option<String> },
    #[error("request rejected ({status})")]
    Rejected { status: u16, message: Option<String>, code: Option<String> },
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String>, code: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Error envelope the backend sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-success status, reading `{message, error}` from the body when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
        let message = envelope.message.filter(|m| !m.trim().is_empty());
        let code = envelope.error.filter(|c| !c.trim().is_empty());
        match status {
            401 => Self::Unauthorized { message },
            400..=499 => Self::Rejected { status, message, code },
            _ => Self::Server { status, message, code },
        }
    }

    /// Backend-supplied message, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } | Self::Server { message, .. } => {
                message.as_deref()
            }
            Self::Unreachable(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// Backend error code (e.g. `DATABASE_TIMEOUT`), if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } | Self::Server { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Text for an inline error: the server's message verbatim, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Unreachable(err.to_string())
    }
}
