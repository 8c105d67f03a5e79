use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid identifier")]
    InvalidId,

    #[error("User not found")]
    UserNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Email already exists")]
    EmailExists,

    #[error("Username already exists")]
    UsernameExists,

    #[error("Project title already exists")]
    ProjectTitleExists,

    #[error("Project code already exists")]
    ProjectCodeExists,

    #[error("Record is not deleted")]
    NotDeleted,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// HTTP status the error maps to at the API boundary.
    pub fn status(&self) -> u16 {
        match self {
            CoreError::Validation(_)
            | CoreError::InvalidId
            | CoreError::EmailExists
            | CoreError::UsernameExists
            | CoreError::ProjectTitleExists
            | CoreError::ProjectCodeExists
            | CoreError::NotDeleted => 400,
            CoreError::InvalidCredentials => 401,
            CoreError::UserNotFound | CoreError::ProjectNotFound | CoreError::TaskNotFound => 404,
            CoreError::InternalServerError => 500,
        }
    }

    /// Stable machine-readable code, surfaced in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "ValidationError",
            CoreError::InvalidId => "InvalidIdError",
            CoreError::UserNotFound => "UserNotFoundError",
            CoreError::ProjectNotFound => "ProjectNotFoundError",
            CoreError::TaskNotFound => "TaskNotFoundError",
            CoreError::EmailExists => "EmailExistsError",
            CoreError::UsernameExists => "UsernameExistsError",
            CoreError::ProjectTitleExists => "ProjectTitleExistsError",
            CoreError::ProjectCodeExists => "ProjectCodeExistsError",
            CoreError::NotDeleted => "NotDeletedError",
            CoreError::InvalidCredentials => "InvalidCredentialsError",
            CoreError::InternalServerError => "InternalServerError",
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            CoreError::Validation(details) => Some(details.clone()),
            _ => None,
        }
    }
}
