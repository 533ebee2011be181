//! Document client

mod types;

use crate::error::{Error, Result};
use crate::fetch::{Fetch, Transport};

pub use types::*;

/// Client for `/documents`
#[derive(Debug, Clone)]
pub struct DocumentClient {
    transport: Transport,
}

impl DocumentClient {
    /// Create a new document client
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the documents owned by `owner_id`
    pub async fn get_all(&self, owner_id: i64) -> Result<Vec<Document>> {
        Fetch::get(&self.transport, &format!("/documents?ownerId={}", owner_id))
            .execute::<Vec<Document>>()
            .await
    }

    /// List the documents attached to a person
    pub async fn get_by_person(&self, person_id: i64) -> Result<Vec<Document>> {
        Fetch::get(&self.transport, &format!("/documents?personId={}", person_id))
            .execute::<Vec<Document>>()
            .await
    }

    /// Fetch a single document
    pub async fn get_by_id(&self, id: i64) -> Result<Document> {
        Fetch::get(&self.transport, &format!("/documents/{}", id))
            .execute::<Document>()
            .await
    }

    /// Server-side search over the documents of `owner_id`
    pub async fn search(&self, query: &str, owner_id: i64) -> Result<Vec<Document>> {
        let path = format!(
            "/documents/search?q={}&ownerId={}",
            urlencoding::encode(query),
            owner_id
        );
        Fetch::get(&self.transport, &path)
            .execute::<Vec<Document>>()
            .await
    }

    /// Create a document. Name and file path must not be blank.
    pub async fn create(&self, document: &NewDocument) -> Result<Document> {
        if document.name.trim().is_empty() {
            return Err(Error::validation("Please enter a document name"));
        }
        if document.file_path.trim().is_empty() {
            return Err(Error::validation("A file path is required"));
        }

        Fetch::post(&self.transport, "/documents")
            .json(document)?
            .execute::<Document>()
            .await
    }

    /// Edit name, type or description
    pub async fn update(&self, id: i64, update: &DocumentUpdate) -> Result<Document> {
        Fetch::put(&self.transport, &format!("/documents/{}", id))
            .json(update)?
            .execute::<Document>()
            .await
    }

    /// Delete a document
    pub async fn delete(&self, id: i64) -> Result<()> {
        Fetch::delete(&self.transport, &format!("/documents/{}", id))
            .execute_empty()
            .await
    }
}
