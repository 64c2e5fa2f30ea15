//! User records: the customers and staff the storefront knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Serialized with camelCase names (`isAdmin`) because this is the exact
/// shape persisted under the `"user"` storage key. Optional contact fields
/// are omitted when empty and tolerated when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the registry.
    pub id: String,

    /// Unique among registered users, compared case-insensitively.
    pub email: String,

    /// Display name. Also accepted as a login identifier.
    pub name: String,

    /// Back-office access. Set at creation, never changed by the user.
    #[serde(default)]
    pub is_admin: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Returns `true` if `identifier` names this user by email or display
    /// name, ignoring case.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        !identifier.is_empty()
            && (eq_ignore_case(&self.email, identifier) || eq_ignore_case(&self.name, identifier))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// What a visitor fills in on the sign-up form.
///
/// No `id` and no admin flag: the registry assigns the first and forces
/// the second to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Unicode-aware case-insensitive comparison ("ÁLVARO" == "álvaro").
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "7".into(),
            email: "Laura@Ejemplo.com".into(),
            name: "Laura Pérez".into(),
            is_admin: false,
            address: None,
            phone: Some("600 000 000".into()),
        }
    }

    #[test]
    fn test_matches_identifier_email_ignores_case() {
        assert!(sample().matches_identifier("laura@ejemplo.com"));
        assert!(sample().matches_identifier("LAURA@EJEMPLO.COM"));
    }

    #[test]
    fn test_matches_identifier_name_ignores_case() {
        assert!(sample().matches_identifier("laura pérez"));
        assert!(sample().matches_identifier("LAURA PÉREZ"));
    }

    #[test]
    fn test_matches_identifier_empty_never_matches() {
        let mut user = sample();
        user.name = String::new();
        assert!(!user.matches_identifier(""));
    }

    #[test]
    fn test_matches_identifier_partial_does_not_match() {
        assert!(!sample().matches_identifier("laura"));
    }

    #[test]
    fn test_user_serializes_with_camel_case_and_skips_missing_fields() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["phone"], "600 000 000");
        assert!(json.get("address").is_none(), "None fields are omitted");
        assert!(json.get("is_admin").is_none());
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"1","email":"a@b.c","name":"A","isAdmin":true}"#,
        )
        .unwrap();

        assert!(user.is_admin);
        assert_eq!(user.address, None);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_user_display() {
        assert_eq!(sample().to_string(), "Laura Pérez <Laura@Ejemplo.com>");
    }
}
