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
    task::validators::ReplaceTaskValidator,
};

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "task",
    summary = "Replace task",
    description = "Full update of a task; omitted optional fields are cleared.",
    params(
        ("id" = i32, Path, description = "Task ID"),
    ),
    request_body = ReplaceTaskValidator,
    responses(
        (status = 200, body = Envelope<TaskDetails>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Task, project or user not found")
    ),
)]
pub async fn replace_task(
    IdPath(task_id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReplaceTaskValidator>,
) -> Result<Response<TaskDetails>, ApiError> {
    let task = state
        .service
        .update_task(UpdateTaskInput {
            task_id,
            title: Some(payload.title),
            description: payload.description,
            task_type: Some(payload.task_type),
            priority: Some(payload.priority),
            status: Some(payload.status),
            labels: Some(payload.labels),
            due_date: Some(payload.due_date),
            project_id: Some(payload.project_id),
            reporter_id: Some(payload.reporter_id),
            assignee_id: Some(payload.assignee_id),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Task updated successfully", task))
}
