//! Types for person records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::initials_of;

/// A person the current user keeps documents for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// The person ID, assigned by the server
    pub id: i64,

    /// Display name
    pub name: String,

    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// ID of the user that created this record
    pub created_by_user_id: i64,

    /// The creation time
    pub created_at: DateTime<Utc>,

    /// The update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Person {
    /// Up to two upper-case initials of the name
    pub fn initials(&self) -> String {
        initials_of(&self.name)
    }

    /// Apply a partial update to a copy of this person
    pub fn with_update(&self, update: &PersonUpdate) -> Person {
        Person {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            phone: update.phone.clone().or_else(|| self.phone.clone()),
            address: update.address.clone().or_else(|| self.address.clone()),
            ..self.clone()
        }
    }
}

/// Body of a person create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_by_user_id: i64,
}

impl NewPerson {
    /// Create a request with the required fields
    pub fn new(name: &str, created_by_user_id: i64) -> Self {
        Self {
            name: name.to_string(),
            phone: None,
            address: None,
            created_by_user_id,
        }
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}

/// Partial person update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
