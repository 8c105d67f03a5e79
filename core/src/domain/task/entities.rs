use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, project::entities::ProjectSummary,
    user::entities::UserSummary,
};

macro_rules! storage_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(CoreError::Validation(format!(concat!("unknown ", $label, " `{}`"), s))),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Bug,
    Feature,
    Improvement,
    Chore,
}

storage_enum!(TaskType, "task type", {
    Bug => "bug",
    Feature => "feature",
    Improvement => "improvement",
    Chore => "chore",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

storage_enum!(TaskPriority, "task priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InReview,
    Done,
    Archived,
}

storage_enum!(TaskStatus, "task status", {
    Todo => "todo",
    InProgress => "in_progress",
    InReview => "in_review",
    Done => "done",
    Archived => "archived",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub original_status: Option<TaskStatus>,
    pub labels: Vec<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: i32,
    pub reporter_id: i32,
    pub assignee_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Archives the task, remembering the status it had.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.original_status = Some(self.status);
        self.status = TaskStatus::Archived;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn restore(&mut self) -> Result<(), CoreError> {
        if self.deleted_at.is_none() {
            return Err(CoreError::NotDeleted);
        }
        self.status = self.original_status.take().unwrap_or(TaskStatus::Todo);
        self.deleted_at = None;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// A task with reporter, assignee and project eager-loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    #[serde(flatten)]
    pub task: Task,
    pub reporter: Option<UserSummary>,
    pub assignee: Option<UserSummary>,
    pub project: Option<ProjectSummary>,
}
