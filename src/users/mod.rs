//! User profile client

mod types;

use crate::error::Result;
use crate::fetch::{Fetch, Transport};

pub use types::*;

/// Client for `/users`
#[derive(Debug, Clone)]
pub struct UserClient {
    transport: Transport,
}

impl UserClient {
    /// Create a new user client
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a user profile by id
    pub async fn get_profile(&self, id: i64) -> Result<User> {
        Fetch::get(&self.transport, &format!("/users/{}", id))
            .execute::<User>()
            .await
    }

    /// Update a user profile and return the stored result
    pub async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<User> {
        Fetch::put(&self.transport, &format!("/users/{}", id))
            .json(update)?
            .execute::<User>()
            .await
    }
}
