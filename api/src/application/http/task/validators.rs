use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tasktrack_core::domain::task::entities::{TaskPriority, TaskStatus, TaskType};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validate_labels(labels: &[String]) -> Result<(), ValidationError> {
    if labels.iter().any(|label| label.trim().is_empty() || label.contains(',')) {
        return Err(ValidationError::new("label")
            .with_message("labels must be non-empty and must not contain commas".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskValidator {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub task_type: TaskType,

    #[serde(default)]
    pub priority: Option<TaskPriority>,

    #[serde(default)]
    pub status: Option<TaskStatus>,

    #[serde(default)]
    #[validate(custom(function = "validate_labels"))]
    pub labels: Vec<String>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "projectId must be positive"))]
    pub project_id: i32,

    #[validate(range(min = 1, message = "reporterId must be positive"))]
    pub reporter_id: i32,

    #[serde(default)]
    pub assignee_id: Option<i32>,
}

/// PATCH body. `assigneeId: null` and `dueDate: null` clear the value,
/// omitting them keeps it.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "type")]
    pub task_type: Option<TaskType>,

    #[serde(default)]
    pub priority: Option<TaskPriority>,

    #[serde(default)]
    pub status: Option<TaskStatus>,

    #[serde(default)]
    #[validate(custom(function = "validate_labels"))]
    pub labels: Option<Vec<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub due_date: Option<Option<DateTime<Utc>>>,

    #[serde(default)]
    #[validate(range(min = 1, message = "projectId must be positive"))]
    pub project_id: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "reporterId must be positive"))]
    pub reporter_id: Option<i32>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub assignee_id: Option<Option<i32>>,
}

/// PUT body: the full task. Omitted optional fields are cleared.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTaskValidator {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub task_type: TaskType,

    pub priority: TaskPriority,

    pub status: TaskStatus,

    #[serde(default)]
    #[validate(custom(function = "validate_labels"))]
    pub labels: Vec<String>,

    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "projectId must be positive"))]
    pub project_id: i32,

    #[validate(range(min = 1, message = "reporterId must be positive"))]
    pub reporter_id: i32,

    #[serde(default)]
    pub assignee_id: Option<i32>,
}
