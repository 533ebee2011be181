//! Authentication against the DocManager API

mod types;

use log::info;

use crate::error::{Error, Result};
use crate::fetch::{Fetch, Transport};

pub use types::*;

/// Client for `/auth`
#[derive(Debug, Clone)]
pub struct AuthClient {
    transport: Transport,
}

impl AuthClient {
    /// Create a new Auth client
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Sign in with username and password.
    ///
    /// Failures are returned untouched: a rejected login shows up as
    /// [`Error::Api`] with status 401/403, an unreachable server as
    /// [`Error::Http`]. Nothing is retried and nothing is stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::validation("Please fill in all fields"));
        }

        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = Fetch::post(&self.transport, "/auth/login")
            .json(&body)?
            .execute::<LoginResponse>()
            .await?;

        info!("Logged in as {} (id {})", response.user.username, response.user.id);
        Ok(response)
    }
}
