use axum::extract::State;
use tasktrack_core::domain::project::{entities::ProjectDetails, ports::ProjectService};

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
    tag = "project",
    summary = "Restore project",
    params(
        ("id" = i32, Path, description = "Project ID"),
    ),
    responses(
        (status = 200, body = Envelope<ProjectDetails>),
        (status = 400, description = "Project is not deleted"),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn restore_project(
    IdPath(project_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<ProjectDetails>, ApiError> {
    let project = state
        .service
        .restore_project(project_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Project restored successfully", project))
}
