use axum::extract::State;
use tasktrack_core::domain::task::{
    entities::TaskDetails, ports::TaskService, value_objects::UpdateTaskInput,
};

use crate::application::http::{
    path::IdPath,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
    task::validators::UpdateTaskValidator,
};

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "task",
    summary = "Update task",
    description = "Partially updates a task. `assigneeId: null` unassigns it and `dueDate: null` clears the due date.",
    params(
        ("id" = i32, Path, description = "Task ID"),
    ),
    request_body = UpdateTaskValidator,
    responses(
        (status = 200, body = Envelope<TaskDetails>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Task, project or user not found")
    ),
)]
pub async fn update_task(
    IdPath(task_id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateTaskValidator>,
) -> Result<Response<TaskDetails>, ApiError> {
    let task = state
        .service
        .update_task(UpdateTaskInput {
            task_id,
            title: payload.title,
            description: payload.description,
            task_type: payload.task_type,
            priority: payload.priority,
            status: payload.status,
            labels: payload.labels,
            due_date: payload.due_date,
            project_id: payload.project_id,
            reporter_id: payload.reporter_id,
            assignee_id: payload.assignee_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Task updated successfully", task))
}
