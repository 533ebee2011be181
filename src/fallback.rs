//! Demo datasets used when the API cannot be reached
//!
//! Read paths swap in these fixed records whenever a fetch fails, whatever the
//! cause, so every page stays usable without a backend. Demo data is never
//! written back and is replaced by the next successful fetch.

use chrono::{DateTime, Utc};
use log::warn;

use crate::documents::{Document, DocumentType};
use crate::error::Result;
use crate::persons::Person;
use crate::users::User;

/// Where loaded data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Returned by the API
    Remote,
    /// Substituted from the demo dataset after a failed fetch
    Demo,
}

/// Data ready to render, tagged with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    /// Data fetched from the API
    pub fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    /// Data taken from the demo dataset
    pub fn demo(data: T) -> Self {
        Self {
            data,
            source: DataSource::Demo,
        }
    }

    /// Keep a successful result, otherwise substitute `fallback()`.
    ///
    /// The failure cause is logged and otherwise ignored.
    pub fn or_demo(result: Result<T>, what: &str, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(data) => Self::remote(data),
            Err(err) => {
                warn!("Loading {} failed, showing demo data: {}", what, err);
                Self::demo(fallback())
            }
        }
    }

    /// True when the data is demo data
    pub fn is_demo(&self) -> bool {
        self.source == DataSource::Demo
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            data: f(self.data),
            source: self.source,
        }
    }
}

fn at(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

// 2025-01-15T10:00:00Z
const JAN_15: i64 = 1_736_935_200;
// 2025-01-20T10:00:00Z
const JAN_20: i64 = 1_737_367_200;
// 2025-02-01T10:00:00Z
const FEB_01: i64 = 1_738_404_000;
// 2025-02-10T10:00:00Z
const FEB_10: i64 = 1_739_181_600;
// 2025-03-05T10:00:00Z
const MAR_05: i64 = 1_741_168_800;
// 2025-03-20T10:00:00Z
const MAR_20: i64 = 1_742_464_800;

fn document(
    id: i64,
    name: &str,
    doc_type: DocumentType,
    file: &str,
    person_id: Option<i64>,
    description: &str,
    created_at: i64,
) -> Document {
    Document {
        id,
        name: name.to_string(),
        doc_type,
        file_path: format!("/files/{}", file),
        thumbnail_path: None,
        owner_id: 1,
        owner_name: None,
        person_id,
        description: Some(description.to_string()),
        created_at: at(created_at),
        updated_at: None,
    }
}

/// The account used by demo login
pub fn demo_user() -> User {
    User {
        id: 1,
        username: "demo".to_string(),
        full_name: "Demo User".to_string(),
        email: Some("demo@example.com".to_string()),
        phone: None,
        profile_image_path: None,
        created_at: None,
    }
}

/// Documents shown on the dashboard
pub fn demo_documents() -> Vec<Document> {
    vec![
        document(1, "Aadhar Card", DocumentType::Aadhar, "aadhar.jpg", None, "Personal Aadhar", JAN_15),
        document(2, "PAN Card", DocumentType::Pan, "pan.jpg", None, "Income tax PAN", FEB_01),
        document(3, "Bank Passbook", DocumentType::BankPassbook, "passbook.jpg", None, "SBI Savings Account", FEB_10),
        document(4, "Passport Photo", DocumentType::Photo, "photo.jpg", None, "Recent passport size photo", MAR_05),
        document(5, "Degree Certificate", DocumentType::Certificate, "degree.pdf", None, "B.Tech Computer Science", MAR_20),
    ]
}

/// Persons shown in person lists
pub fn demo_persons() -> Vec<Person> {
    vec![
        demo_person(),
        Person {
            id: 2,
            name: "Priya Patel".to_string(),
            phone: Some("9123456780".to_string()),
            address: Some("45 Park Street, Kolkata".to_string()),
            created_by_user_id: 1,
            created_at: at(JAN_20),
            updated_at: None,
        },
    ]
}

/// The person shown on a person detail page
pub fn demo_person() -> Person {
    Person {
        id: 1,
        name: "Rahul Sharma".to_string(),
        phone: Some("9876543210".to_string()),
        address: Some("123 MG Road, Delhi".to_string()),
        created_by_user_id: 1,
        created_at: at(JAN_15),
        updated_at: None,
    }
}

/// Documents of [`demo_person`]
pub fn demo_person_documents() -> Vec<Document> {
    vec![
        document(1, "Aadhar Card", DocumentType::Aadhar, "aadhar.jpg", Some(1), "Personal Aadhar", JAN_15),
        document(2, "PAN Card", DocumentType::Pan, "pan.jpg", Some(1), "Income tax PAN", FEB_01),
    ]
}

/// The document shown on a document page
pub fn demo_document() -> Document {
    document(1, "Aadhar Card", DocumentType::Aadhar, "aadhar.jpg", None, "Personal Aadhar Card", JAN_15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    #[test]
    fn test_timestamps() {
        assert_eq!(demo_person().created_at.to_rfc3339(), "2025-01-15T10:00:00+00:00");
        assert_eq!(demo_documents()[4].created_at.to_rfc3339(), "2025-03-20T10:00:00+00:00");
    }

    #[test]
    fn test_or_demo_keeps_success() {
        let loaded = Loaded::or_demo(Ok(vec![1, 2]), "numbers", Vec::new);
        assert_eq!(loaded, Loaded::remote(vec![1, 2]));
        assert!(!loaded.is_demo());
    }

    #[test]
    fn test_or_demo_ignores_failure_cause() {
        for err in [Error::api(500, "boom"), Error::validation("bad"), Error::api(404, "")] {
            let loaded = Loaded::or_demo(Err(err), "persons", demo_persons);
            assert!(loaded.is_demo());
            assert_eq!(loaded.data, demo_persons());
        }
    }

    #[test]
    fn test_map_keeps_source() {
        let loaded = Loaded::demo(demo_documents()).map(|docs| docs.len());
        assert_eq!(loaded, Loaded::demo(5));

        let loaded = Loaded::remote(vec![demo_person()]).map(|persons| persons.is_empty());
        assert_eq!(loaded.source, DataSource::Remote);
        assert!(!loaded.data);
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let ids: HashSet<i64> = demo_documents().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), demo_documents().len());

        let ids: HashSet<i64> = demo_persons().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), demo_persons().len());
    }

    #[test]
    fn test_person_documents_reference_demo_person() {
        let person = demo_person();
        assert!(demo_person_documents()
            .iter()
            .all(|d| d.person_id == Some(person.id)));
    }
}
