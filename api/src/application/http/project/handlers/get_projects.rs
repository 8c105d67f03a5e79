use axum::extract::State;
use tasktrack_core::domain::{
    common::query::Paginated,
    project::{entities::ProjectDetails, ports::ProjectService},
};

use crate::application::http::{
    query_extractor::ListQueryExtractor,
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
    path = "",
    tag = "project",
    summary = "List projects",
    description = "Lists projects with their owner. Accepts the same filter and paging parameters as tasks.",
    params(
        ("order" = Option<String>, Query, description = "Sort key, `-` prefix for descending"),
        ("all" = Option<bool>, Query, description = "Include archived projects"),
        ("deleted" = Option<bool>, Query, description = "Only archived projects"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = Envelope<Paginated<ProjectDetails>>),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<Paginated<ProjectDetails>>, ApiError> {
    let projects = state
        .service
        .get_projects(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Projects retrieved successfully", projects))
}
