//! Types for user profiles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user ID, assigned by the server
    pub id: i64,

    /// The login name
    pub username: String,

    /// The display name
    pub full_name: String,

    /// The user's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The user's phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Path of the profile picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_path: Option<String>,

    /// The creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Up to two upper-case initials taken from the full name, `"U"` when empty
    pub fn initials(&self) -> String {
        let initials = initials_of(&self.full_name);
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// First word of the full name, used in greetings
    pub fn first_name(&self) -> Option<&str> {
        self.full_name.split_whitespace().next()
    }

    /// Apply a profile edit to a copy of this user
    pub fn with_profile(&self, update: &ProfileUpdate) -> User {
        User {
            full_name: update.full_name.clone(),
            email: update.email.clone().or_else(|| self.email.clone()),
            phone: update.phone.clone().or_else(|| self.phone.clone()),
            profile_image_path: update
                .profile_image_path
                .clone()
                .or_else(|| self.profile_image_path.clone()),
            ..self.clone()
        }
    }
}

/// Fields accepted by a profile update. The full name is always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name
    pub full_name: String,

    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New profile picture path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_path: Option<String>,
}

impl ProfileUpdate {
    /// Create an update that only changes the full name
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Set the profile picture path
    pub fn with_profile_image_path(mut self, path: &str) -> Self {
        self.profile_image_path = Some(path.to_string());
        self
    }
}

pub(crate) fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(full_name: &str) -> User {
        User {
            id: 1,
            username: "demo".to_string(),
            full_name: full_name.to_string(),
            email: Some("demo@example.com".to_string()),
            phone: None,
            profile_image_path: None,
            created_at: None,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "username": "rahul",
            "fullName": "Rahul Sharma",
            "profileImagePath": "/files/rahul.jpg",
            "createdAt": "2025-01-15T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(user.full_name, "Rahul Sharma");
        assert_eq!(user.profile_image_path.as_deref(), Some("/files/rahul.jpg"));
        assert!(user.email.is_none());
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("Demo User").initials(), "DU");
        assert_eq!(user("ada lovelace byron").initials(), "AL");
        assert_eq!(user("").initials(), "U");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(user("Demo User").first_name(), Some("Demo"));
        assert_eq!(user("  ").first_name(), None);
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let body = serde_json::to_value(ProfileUpdate::new("New Name").with_phone("123")).unwrap();
        assert_eq!(body, json!({ "fullName": "New Name", "phone": "123" }));
    }

    #[test]
    fn test_with_profile_keeps_identity() {
        let before = user("Demo User");
        let after = before.with_profile(&ProfileUpdate::new("Demo Person").with_phone("555"));

        assert_eq!(after.id, before.id);
        assert_eq!(after.username, before.username);
        assert_eq!(after.full_name, "Demo Person");
        assert_eq!(after.phone.as_deref(), Some("555"));
        assert_eq!(after.email, before.email);
    }

    #[test]
    fn test_with_profile_sets_image() {
        let update = ProfileUpdate::new("Demo User").with_profile_image_path("/files/me.png");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "fullName": "Demo User", "profileImagePath": "/files/me.png" })
        );

        let after = user("Demo User").with_profile(&update);
        assert_eq!(after.profile_image_path.as_deref(), Some("/files/me.png"));
    }
}
