use serde::{Deserialize, Serialize};
use tasktrack_core::domain::project::entities::ProjectStatus;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectValidator {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "code must be 1-50 characters"))]
    pub code: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<ProjectStatus>,

    #[validate(range(min = 1, message = "ownerId must be a positive integer"))]
    pub owner_id: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "code must be 1-50 characters"))]
    pub code: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<ProjectStatus>,

    #[serde(default)]
    #[validate(range(min = 1, message = "ownerId must be a positive integer"))]
    pub owner_id: Option<i32>,
}
