use axum::extract::State;
use serde::{Deserialize, Serialize};
use tasktrack_core::domain::project::ports::ProjectService;
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
pub struct DeleteProjectResponse {
    pub id: i32,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "project",
    summary = "Delete project",
    description = "Archives a project.",
    params(
        ("id" = i32, Path, description = "Project ID"),
    ),
    responses(
        (status = 200, body = Envelope<DeleteProjectResponse>),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn delete_project(
    IdPath(project_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<DeleteProjectResponse>, ApiError> {
    state
        .service
        .delete_project(project_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok(
        "Project deleted successfully",
        DeleteProjectResponse { id: project_id },
    ))
}
