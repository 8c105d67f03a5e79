use axum::extract::State;
use tasktrack_core::domain::project::{
    entities::ProjectDetails, ports::ProjectService, value_objects::CreateProjectInput,
};

use crate::application::http::{
    project::validators::CreateProjectValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "project",
    summary = "Create project",
    description = "Creates a project. Title and code must be unused; status defaults to planned.",
    request_body = CreateProjectValidator,
    responses(
        (status = 201, body = Envelope<ProjectDetails>),
        (status = 400, description = "Validation failed, or title/code already taken"),
        (status = 404, description = "Owner not found")
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProjectValidator>,
) -> Result<Response<ProjectDetails>, ApiError> {
    let project = state
        .service
        .create_project(CreateProjectInput {
            title: payload.title,
            code: payload.code,
            description: payload.description,
            status: payload.status,
            owner_id: payload.owner_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::created("Project created successfully", project))
}
