use axum::extract::State;
use tasktrack_core::domain::user::{entities::User, ports::UserService};

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
    tag = "user",
    summary = "Get user",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Envelope<User>),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "User not found or soft-deleted")
    ),
)]
pub async fn get_user(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("User retrieved successfully", user))
}
