//! Configuration options for the DocManager client

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Storage key the current user is persisted under
pub const DEFAULT_SESSION_KEY: &str = "user";

/// Configuration options for the DocManager client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The API base URL every endpoint path is appended to
    pub base_url: String,

    /// The request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,

    /// The key the session record is stored under
    pub session_key: String,

    /// Headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            headers: HashMap::new(),
        }
    }
}

impl ClientOptions {
    /// Build options from `DOCMANAGER_API_URL` and `DOCMANAGER_TIMEOUT_SECS`.
    ///
    /// Missing variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();

        if let Ok(url) = std::env::var("DOCMANAGER_API_URL") {
            options = options.with_base_url(&url);
        }

        if let Ok(secs) = std::env::var("DOCMANAGER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::validation(format!("DOCMANAGER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            options = options.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        Ok(options)
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the session storage key
    pub fn with_session_key(mut self, value: &str) -> Self {
        self.session_key = value.to_string();
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "http://localhost:8080/api");
        assert_eq!(options.session_key, "user");
        assert!(options.request_timeout.is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let options = ClientOptions::default().with_base_url("http://example.test/api/");
        assert_eq!(options.base_url, "http://example.test/api");
    }

    #[test]
    fn test_builders() {
        let options = ClientOptions::default()
            .with_request_timeout(Some(Duration::from_secs(5)))
            .with_session_key("current-user")
            .with_header("X-Client", "cli");

        assert_eq!(options.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.session_key, "current-user");
        assert_eq!(options.headers.get("X-Client"), Some(&"cli".to_string()));
    }

    // The only test touching these variables, so it cannot race with another.
    #[test]
    fn test_from_env() {
        std::env::remove_var("DOCMANAGER_API_URL");
        std::env::remove_var("DOCMANAGER_TIMEOUT_SECS");
        let options = ClientOptions::from_env().unwrap();
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert!(options.request_timeout.is_none());

        std::env::set_var("DOCMANAGER_API_URL", "https://docs.example.test/api/");
        std::env::set_var("DOCMANAGER_TIMEOUT_SECS", " 30 ");
        let options = ClientOptions::from_env().unwrap();
        assert_eq!(options.base_url, "https://docs.example.test/api");
        assert_eq!(options.request_timeout, Some(Duration::from_secs(30)));

        std::env::set_var("DOCMANAGER_TIMEOUT_SECS", "soon");
        let err = ClientOptions::from_env().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.message().contains("soon"));

        std::env::remove_var("DOCMANAGER_API_URL");
        std::env::remove_var("DOCMANAGER_TIMEOUT_SECS");
    }
}
