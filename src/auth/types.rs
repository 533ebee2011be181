//! Types for authentication

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::users::User;

/// Login credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login name
    pub username: String,

    /// The password
    pub password: String,
}

// Keep the password out of logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Authentication response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user
    pub user: User,

    /// Opaque token, when the server issues one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
