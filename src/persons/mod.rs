//! Person client

mod types;

use crate::error::{Error, Result};
use crate::fetch::{Fetch, Transport};

pub use types::*;

/// Client for `/persons`
#[derive(Debug, Clone)]
pub struct PersonClient {
    transport: Transport,
}

impl PersonClient {
    /// Create a new person client
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the persons created by `owner_user_id`
    pub async fn get_all(&self, owner_user_id: i64) -> Result<Vec<Person>> {
        Fetch::get(&self.transport, &format!("/persons?userId={}", owner_user_id))
            .execute::<Vec<Person>>()
            .await
    }

    /// Fetch a single person
    pub async fn get_by_id(&self, id: i64) -> Result<Person> {
        Fetch::get(&self.transport, &format!("/persons/{}", id))
            .execute::<Person>()
            .await
    }

    /// Server-side search over the persons of `owner_user_id`
    pub async fn search(&self, query: &str, owner_user_id: i64) -> Result<Vec<Person>> {
        let path = format!(
            "/persons/search?q={}&userId={}",
            urlencoding::encode(query),
            owner_user_id
        );
        Fetch::get(&self.transport, &path)
            .execute::<Vec<Person>>()
            .await
    }

    /// Create a person. The name must not be blank.
    pub async fn create(&self, person: &NewPerson) -> Result<Person> {
        if person.name.trim().is_empty() {
            return Err(Error::validation("Please enter a name"));
        }

        Fetch::post(&self.transport, "/persons")
            .json(person)?
            .execute::<Person>()
            .await
    }

    /// Apply a partial update
    pub async fn update(&self, id: i64, update: &PersonUpdate) -> Result<Person> {
        Fetch::put(&self.transport, &format!("/persons/{}", id))
            .json(update)?
            .execute::<Person>()
            .await
    }

    /// Delete a person. The server removes its documents as well.
    pub async fn delete(&self, id: i64) -> Result<()> {
        Fetch::delete(&self.transport, &format!("/persons/{}", id))
            .execute_empty()
            .await
    }
}
