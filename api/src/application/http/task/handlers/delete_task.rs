use axum::extract::State;
use serde::{Deserialize, Serialize};
use tasktrack_core::domain::task::ports::TaskService;
use utoipa::ToSchema;

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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteTaskResponse {
    pub id: i32,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "task",
    summary = "Delete task",
    description = "Archives a task. Its status is kept aside and comes back on restore.",
    params(
        ("id" = i32, Path, description = "Task ID"),
    ),
    responses(
        (status = 200, body = Envelope<DeleteTaskResponse>),
        (status = 404, description = "Task not found")
    ),
)]
pub async fn delete_task(
    IdPath(task_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<DeleteTaskResponse>, ApiError> {
    state
        .service
        .delete_task(task_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok(
        "Task deleted successfully",
        DeleteTaskResponse { id: task_id },
    ))
}
