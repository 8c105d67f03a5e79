use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        query::{ListQuery, Paginated},
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    project::ports::ProjectRepository,
    task::{
        entities::{TaskDetails, TaskPriority, TaskStatus},
        ports::{TaskRepository, TaskService},
        schema::TASK_SCHEMA,
        value_objects::{CreateTaskInput, NewTask, UpdateTaskInput},
    },
    user::ports::UserRepository,
};

impl<U, P, T, H, HC> Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn task_details(&self, task_id: i32) -> Result<TaskDetails, CoreError> {
        self.task_repository
            .get_details(task_id)
            .await?
            .ok_or(CoreError::TaskNotFound)
    }
}

impl<U, P, T, H, HC> TaskService for Service<U, P, T, H, HC>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_tasks(&self, query: ListQuery) -> Result<Paginated<TaskDetails>, CoreError> {
        let criteria = query.into_criteria(&TASK_SCHEMA)?;
        self.task_repository.list(criteria).await
    }

    #[instrument(skip(self))]
    async fn get_task(&self, task_id: i32) -> Result<TaskDetails, CoreError> {
        self.task_details(task_id).await
    }

    #[instrument(skip(self, input), fields(project_id = input.project_id))]
    async fn create_task(&self, input: CreateTaskInput) -> Result<TaskDetails, CoreError> {
        self.ensure_project_exists(input.project_id).await?;
        self.ensure_user_exists(input.reporter_id).await?;
        if let Some(assignee_id) = input.assignee_id {
            self.ensure_user_exists(assignee_id).await?;
        }

        let task = self
            .task_repository
            .create_task(NewTask {
                title: input.title,
                description: input.description,
                task_type: input.task_type,
                priority: input.priority.unwrap_or(TaskPriority::Medium),
                status: input.status.unwrap_or(TaskStatus::Todo),
                labels: input.labels,
                due_date: input.due_date,
                project_id: input.project_id,
                reporter_id: input.reporter_id,
                assignee_id: input.assignee_id,
            })
            .await?;

        info!(task_id = task.id, "task created");
        self.task_details(task.id).await
    }

    #[instrument(skip(self, input), fields(task_id = input.task_id))]
    async fn update_task(&self, input: UpdateTaskInput) -> Result<TaskDetails, CoreError> {
        let mut task = self
            .task_repository
            .get_by_id(input.task_id, false)
            .await?
            .ok_or(CoreError::TaskNotFound)?;

        if let Some(project_id) = input.project_id {
            self.ensure_project_exists(project_id).await?;
            task.project_id = project_id;
        }
        if let Some(reporter_id) = input.reporter_id {
            self.ensure_user_exists(reporter_id).await?;
            task.reporter_id = reporter_id;
        }
        if let Some(assignee_id) = input.assignee_id {
            if let Some(id) = assignee_id {
                self.ensure_user_exists(id).await?;
            }
            task.assignee_id = assignee_id;
        }
        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(description) = input.description {
            task.description = Some(description);
        }
        if let Some(task_type) = input.task_type {
            task.task_type = task_type;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(labels) = input.labels {
            task.labels = labels;
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        task.updated_at = Utc::now();

        let task = self.task_repository.update_task(task).await?;
        self.task_details(task.id).await
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, task_id: i32) -> Result<(), CoreError> {
        let mut task = self
            .task_repository
            .get_by_id(task_id, false)
            .await?
            .ok_or(CoreError::TaskNotFound)?;

        task.soft_delete();
        self.task_repository.update_task(task).await?;

        info!(task_id, "task archived");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn restore_task(&self, task_id: i32) -> Result<TaskDetails, CoreError> {
        let mut task = self
            .task_repository
            .get_by_id(task_id, true)
            .await?
            .ok_or(CoreError::TaskNotFound)?;

        task.restore()?;
        let task = self.task_repository.update_task(task).await?;

        info!(task_id, status = %task.status, "task restored");
        self.task_details(task.id).await
    }
}
