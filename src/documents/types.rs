//! Types for document records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The fixed set of document kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Aadhar,
    Pan,
    Passport,
    BankPassbook,
    Photo,
    Certificate,
    #[default]
    Other,
}

impl DocumentType {
    /// Every variant, in display order
    pub const ALL: [DocumentType; 7] = [
        Self::Aadhar,
        Self::Pan,
        Self::Passport,
        Self::BankPassbook,
        Self::Photo,
        Self::Certificate,
        Self::Other,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aadhar => "Aadhar Card",
            Self::Pan => "PAN Card",
            Self::Passport => "Passport",
            Self::BankPassbook => "Bank Passbook",
            Self::Photo => "Photo",
            Self::Certificate => "Certificate",
            Self::Other => "Other",
        }
    }

    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhar => "AADHAR",
            Self::Pan => "PAN",
            Self::Passport => "PASSPORT",
            Self::BankPassbook => "BANK_PASSBOOK",
            Self::Photo => "PHOTO",
            Self::Certificate => "CERTIFICATE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::validation(format!("Unknown document type: {}", s)))
    }
}

/// A stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The document ID, assigned by the server
    pub id: i64,

    /// Display name
    pub name: String,

    /// Kind of document
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Path of the stored file
    pub file_path: String,

    /// Path of a preview image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,

    /// ID of the owning user
    pub owner_id: i64,

    /// Display name of the owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    /// Person this document belongs to, absent for owner-only documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<i64>,

    /// Free text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The creation time
    pub created_at: DateTime<Utc>,

    /// The update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Label of this document's type
    pub fn type_label(&self) -> &'static str {
        self.doc_type.label()
    }

    /// Apply a partial update to a copy of this document
    pub fn with_update(&self, update: &DocumentUpdate) -> Document {
        Document {
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            doc_type: update.doc_type.unwrap_or(self.doc_type),
            description: update.description.clone().or_else(|| self.description.clone()),
            ..self.clone()
        }
    }
}

/// Body of a document create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub file_path: String,
    pub owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
}

impl NewDocument {
    /// Create a request with the required fields
    pub fn new(name: &str, doc_type: DocumentType, file_path: &str, owner_id: i64) -> Self {
        Self {
            name: name.to_string(),
            doc_type,
            file_path: file_path.to_string(),
            owner_id,
            person_id: None,
            description: None,
            thumbnail_path: None,
        }
    }

    /// Attach the document to a person
    pub fn with_person(mut self, person_id: i64) -> Self {
        self.person_id = Some(person_id);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the thumbnail path
    pub fn with_thumbnail(mut self, path: &str) -> Self {
        self.thumbnail_path = Some(path.to_string());
        self
    }
}

/// Partial document update. Only name, type and description are editable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
