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
    get,
    path = "/{id}",
    tag = "task",
    summary = "Get task",
    params(
        ("id" = i32, Path, description = "Task ID"),
    ),
    responses(
        (status = 200, body = Envelope<TaskDetails>),
        (status = 404, description = "Task not found or archived")
    ),
)]
pub async fn get_task(
    IdPath(task_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<TaskDetails>, ApiError> {
    let task = state
        .service
        .get_task(task_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Task retrieved successfully", task))
}
