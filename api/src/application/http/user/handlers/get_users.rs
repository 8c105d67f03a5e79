use axum::extract::State;
use tasktrack_core::domain::{
    common::query::Paginated,
    user::{entities::User, ports::UserService},
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
    tag = "user",
    summary = "List users",
    description = "Lists users. `filter[field][operator]=value` narrows the result, a non-empty `search` matches name, email, username or role and overrides every filter. `all=true` includes soft-deleted users, `deleted=true` returns only them.",
    params(
        ("search" = Option<String>, Query, description = "Free-text search"),
        ("order" = Option<String>, Query, description = "Sort key, `-` prefix for descending"),
        ("all" = Option<bool>, Query, description = "Include soft-deleted users"),
        ("deleted" = Option<bool>, Query, description = "Only soft-deleted users"),
        ("offset" = Option<i64>, Query, description = "Rows to skip"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = Envelope<Paginated<User>>),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<Paginated<User>>, ApiError> {
    let users = state
        .service
        .get_users(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Users retrieved successfully", users))
}
