use axum::extract::State;
use tasktrack_core::domain::{
    common::query::Paginated,
    task::{entities::TaskDetails, ports::TaskService},
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
    tag = "task",
    summary = "List tasks",
    description = "Lists tasks with reporter, assignee and project loaded. Supports `filter[field][operator]=value` with iLike, eq, ne, or, in, contains, overlap and between, and `order=[-]field` or `order=[-]Reporter.firstName`.",
    params(
        ("order" = Option<String>, Query, description = "Sort key, `-` prefix for descending"),
        ("all" = Option<bool>, Query, description = "Include archived tasks"),
        ("deleted" = Option<bool>, Query, description = "Only archived tasks"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = Envelope<Paginated<TaskDetails>>),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<Paginated<TaskDetails>>, ApiError> {
    let tasks = state
        .service
        .get_tasks(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Tasks retrieved successfully", tasks))
}
