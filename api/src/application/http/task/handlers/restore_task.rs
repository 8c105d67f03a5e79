use axum::extract::State;
use tasktrack_core::domain::task::{entities::TaskDetails, ports::TaskService};

use crate::application::http::{
    path::IdPath,
    server::{
        api_entities::{
            api_error::ApiError,
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    patch,
    path = "/{id}/restore",
    tag = "task",
    summary = "Restore task",
    description = "Brings an archived task back with the status it had before deletion.",
    params(
        ("id" = i32, Path, description = "Task ID"),
    ),
    responses(
        (status = 200, body = Envelope<TaskDetails>),
        (status = 400, description = "Task is not deleted"),
        (status = 404, description = "Task not found")
    ),
)]
pub async fn restore_task(
    IdPath(task_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<TaskDetails>, ApiError> {
    let task = state
        .service
        .restore_task(task_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Task restored successfully", task))
}
