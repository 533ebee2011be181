//! DocManager Rust Client Library
//!
//! A Rust client for the DocManager REST API: log in, keep people and their
//! identity documents, and browse, search, edit and delete both. All state lives
//! on the server except the persisted session, and every page degrades to demo
//! data when the API is unreachable.

pub mod auth;
pub mod config;
pub mod documents;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod outcome;
pub mod pages;
pub mod persons;
pub mod search;
pub mod session;
pub mod users;

use reqwest::Client;

use crate::auth::AuthClient;
use crate::config::ClientOptions;
use crate::documents::DocumentClient;
use crate::error::Result;
use crate::fetch::Transport;
use crate::persons::PersonClient;
use crate::users::UserClient;

/// The main entry point for the DocManager client
#[derive(Debug, Clone)]
pub struct DocManager {
    transport: Transport,
    auth: AuthClient,
    users: UserClient,
    persons: PersonClient,
    documents: DocumentClient,
}

impl DocManager {
    /// Create a new client for the API at `base_url`
    ///
    /// # Example
    ///
    /// ```
    /// use docmanager::DocManager;
    ///
    /// let client = DocManager::new("http://localhost:8080/api").unwrap();
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Self::new_with_options(ClientOptions::default().with_base_url(base_url))
    }

    /// Create a new client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use docmanager::{DocManager, config::ClientOptions};
    ///
    /// let options = ClientOptions::default()
    ///     .with_base_url("http://localhost:8080/api")
    ///     .with_request_timeout(Some(Duration::from_secs(10)));
    /// let client = DocManager::new_with_options(options).unwrap();
    /// ```
    pub fn new_with_options(options: ClientOptions) -> Result<Self> {
        Self::with_http_client(Client::new(), options)
    }

    /// Create a new client that reuses an existing `reqwest::Client`
    pub fn with_http_client(http_client: Client, options: ClientOptions) -> Result<Self> {
        let transport = Transport::new(http_client, options)?;

        Ok(Self {
            auth: AuthClient::new(transport.clone()),
            users: UserClient::new(transport.clone()),
            persons: PersonClient::new(transport.clone()),
            documents: DocumentClient::new(transport.clone()),
            transport,
        })
    }

    /// Client options in use
    pub fn options(&self) -> &ClientOptions {
        self.transport.options()
    }

    /// The request core, for endpoints without a typed client
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Login
    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    /// User profiles
    pub fn users(&self) -> &UserClient {
        &self.users
    }

    /// Person records
    pub fn persons(&self) -> &PersonClient {
        &self.persons
    }

    /// Document records
    pub fn documents(&self) -> &DocumentClient {
        &self.documents
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::documents::{Document, DocumentType, DocumentUpdate, NewDocument};
    pub use crate::error::{Error, Result};
    pub use crate::fallback::{DataSource, Loaded};
    pub use crate::outcome::MutationOutcome;
    pub use crate::pages::{Mount, PageContext, Route};
    pub use crate::persons::{NewPerson, Person, PersonUpdate};
    pub use crate::session::{FileSessionStore, MemorySessionStore, SessionGuard, SessionStore};
    pub use crate::users::{ProfileUpdate, User};
    pub use crate::DocManager;
}
