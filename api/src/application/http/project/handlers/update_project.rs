use axum::extract::State;
use tasktrack_core::domain::project::{
    entities::ProjectDetails, ports::ProjectService, value_objects::UpdateProjectInput,
};

use crate::application::http::{
    path::IdPath,
    project::validators::UpdateProjectValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "project",
    summary = "Update project",
    params(
        ("id" = i32, Path, description = "Project ID"),
    ),
    request_body = UpdateProjectValidator,
    responses(
        (status = 200, body = Envelope<ProjectDetails>),
        (status = 400, description = "Validation failed, or title/code already taken"),
        (status = 404, description = "Project or owner not found")
    ),
)]
pub async fn update_project(
    IdPath(project_id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProjectValidator>,
) -> Result<Response<ProjectDetails>, ApiError> {
    let project = state
        .service
        .update_project(UpdateProjectInput {
            project_id,
            title: payload.title,
            code: payload.code,
            description: payload.description,
            status: payload.status,
            owner_id: payload.owner_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Project updated successfully", project))
}
