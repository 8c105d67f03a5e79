pub mod condition;

use sea_orm::{DbErr, SqlErr};

use crate::domain::common::entities::app_errors::CoreError;

/// Message of a unique-constraint violation, if that is what `err` is.
pub fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => Some(message),
        _ => None,
    }
}

/// Typed conflict for a unique-violation message naming one of our indexes.
pub fn unique_constraint_error(message: &str) -> Option<CoreError> {
    [
        ("users_email_key", CoreError::EmailExists),
        ("users_username_key", CoreError::UsernameExists),
        ("projects_title_key", CoreError::ProjectTitleExists),
        ("projects_code_key", CoreError::ProjectCodeExists),
    ]
    .into_iter()
    .find(|(constraint, _)| message.contains(constraint))
    .map(|(_, error)| error)
}
