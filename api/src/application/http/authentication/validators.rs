use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials; the identifier may be sent as `identifier`, `email` or `username`.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[serde(alias = "email", alias = "username")]
    #[validate(length(min = 1, message = "email or username is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_email_or_username_keys() {
        let by_email: LoginValidator = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "password": "analytical"
        }))
        .unwrap();
        assert_eq!(by_email.identifier, "ada@example.com");

        let by_username: LoginValidator = serde_json::from_value(serde_json::json!({
            "username": "ada",
            "password": "analytical"
        }))
        .unwrap();
        assert_eq!(by_username.identifier, "ada");
    }

    #[test]
    fn empty_password_is_rejected() {
        let payload = LoginValidator {
            identifier: "ada".into(),
            password: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
