//! Error handling for the DocManager client

use std::fmt;
use thiserror::Error;

/// Message used when a failed response carries no readable body
pub const REQUEST_FAILED: &str = "Request failed";

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the DocManager client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport errors (server unreachable, DNS, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message taken from the response body
        message: String,
    },

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Endpoint paths must be relative to the API base and start with `/`
    #[error("Invalid endpoint path: {0}")]
    InvalidPath(String),

    /// Session file errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field was missing before any request was made
    #[error("{0}")]
    Validation(String),

    /// The change targets demo records and was not sent to the server
    #[error("Demo data is shown; the change was kept locally")]
    DemoData,
}

impl Error {
    /// Create a new API error from a status and message
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// The message carried by this failure.
    ///
    /// For API errors this is exactly the text extracted from the response body.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a non-2xx response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the server could not be reached
    pub fn is_connectivity(&self) -> bool {
        match self {
            Error::Http(err) => err.is_connect() || err.is_timeout() || err.is_request(),
            _ => false,
        }
    }

    /// True when the server refused the supplied credentials
    pub fn is_rejected_credentials(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }
}

/// Extract the failure message from a non-2xx response body.
///
/// A JSON object with a string `message` or `error` field yields that field,
/// any other non-empty body is used verbatim, and an empty body falls back to
/// [`REQUEST_FAILED`].
pub(crate) fn message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return REQUEST_FAILED.to_string();
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed)
    {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    body.to_string()
}
