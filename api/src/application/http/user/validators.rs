use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tasktrack_core::domain::user::entities::UserRole;
use utoipa::ToSchema;
use validator::Validate;

pub static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]{3,50}$").expect("valid username regex"));

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserValidator {
    #[validate(length(min = 1, max = 100, message = "firstName is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "username must be 3-50 letters, digits, '_', '.' or '-'"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<UserRole>,
}

/// PATCH body; absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "firstName cannot be empty"))]
    pub first_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "lastName cannot be empty"))]
    pub last_name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "username must be 3-50 letters, digits, '_', '.' or '-'"
    ))]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,

    #[serde(default)]
    pub role: Option<UserRole>,
}

/// PUT body; every profile field is required, the password stays optional.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceUserValidator {
    #[validate(length(min = 1, max = 100, message = "firstName is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "lastName is required"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "username must be 3-50 letters, digits, '_', '.' or '-'"
    ))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,

    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(username: &str, email: &str) -> CreateUserValidator {
        CreateUserValidator {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            username: username.into(),
            password: "analytical".into(),
            role: None,
        }
    }

    #[test]
    fn accepts_well_formed_user() {
        assert!(create("ada_l", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn rejects_bad_username_and_email() {
        let errors = create("a d", "not-an-email").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn patch_only_checks_present_fields() {
        let patch = UpdateUserValidator {
            first_name: Some("Grace".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateUserValidator {
            password: Some("short".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
