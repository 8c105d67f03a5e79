use crate::{
    domain::task::entities::{Task, TaskPriority, TaskStatus, TaskType},
    entity::{
        sea_orm_active_enums::{
            TaskPriority as DbTaskPriority, TaskStatus as DbTaskStatus, TaskType as DbTaskType,
        },
        tasks,
    },
};

impl From<DbTaskType> for TaskType {
    fn from(task_type: DbTaskType) -> Self {
        match task_type {
            DbTaskType::Bug => TaskType::Bug,
            DbTaskType::Feature => TaskType::Feature,
            DbTaskType::Improvement => TaskType::Improvement,
            DbTaskType::Chore => TaskType::Chore,
        }
    }
}

impl From<TaskType> for DbTaskType {
    fn from(task_type: TaskType) -> Self {
        match task_type {
            TaskType::Bug => DbTaskType::Bug,
            TaskType::Feature => DbTaskType::Feature,
            TaskType::Improvement => DbTaskType::Improvement,
            TaskType::Chore => DbTaskType::Chore,
        }
    }
}

impl From<DbTaskPriority> for TaskPriority {
    fn from(priority: DbTaskPriority) -> Self {
        match priority {
            DbTaskPriority::Low => TaskPriority::Low,
            DbTaskPriority::Medium => TaskPriority::Medium,
            DbTaskPriority::High => TaskPriority::High,
            DbTaskPriority::Critical => TaskPriority::Critical,
        }
    }
}

impl From<TaskPriority> for DbTaskPriority {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => DbTaskPriority::Low,
            TaskPriority::Medium => DbTaskPriority::Medium,
            TaskPriority::High => DbTaskPriority::High,
            TaskPriority::Critical => DbTaskPriority::Critical,
        }
    }
}

impl From<DbTaskStatus> for TaskStatus {
    fn from(status: DbTaskStatus) -> Self {
        match status {
            DbTaskStatus::Todo => TaskStatus::Todo,
            DbTaskStatus::InProgress => TaskStatus::InProgress,
            DbTaskStatus::InReview => TaskStatus::InReview,
            DbTaskStatus::Done => TaskStatus::Done,
            DbTaskStatus::Archived => TaskStatus::Archived,
        }
    }
}

impl From<TaskStatus> for DbTaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => DbTaskStatus::Todo,
            TaskStatus::InProgress => DbTaskStatus::InProgress,
            TaskStatus::InReview => DbTaskStatus::InReview,
            TaskStatus::Done => DbTaskStatus::Done,
            TaskStatus::Archived => DbTaskStatus::Archived,
        }
    }
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            task_type: model.task_type.into(),
            priority: model.priority.into(),
            status: model.status.into(),
            original_status: model.original_status.map(TaskStatus::from),
            labels: model.labels,
            due_date: model.due_date.map(|dt| dt.to_utc()),
            project_id: model.project_id,
            reporter_id: model.reporter_id,
            assignee_id: model.assignee_id,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            deleted_at: model.deleted_at.map(|dt| dt.to_utc()),
        }
    }
}
