use chrono::{DateTime, Utc};

use super::entities::{TaskPriority, TaskStatus, TaskType};

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub labels: Vec<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: i32,
    pub reporter_id: i32,
    pub assignee_id: Option<i32>,
}

/// Partial update. `assignee_id: Some(None)` clears the assignee.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub task_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub task_type: Option<TaskType>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub labels: Option<Vec<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub project_id: Option<i32>,
    pub reporter_id: Option<i32>,
    pub assignee_id: Option<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub labels: Vec<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: i32,
    pub reporter_id: i32,
    pub assignee_id: Option<i32>,
}
