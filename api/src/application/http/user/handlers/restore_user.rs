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
    patch,
    path = "/{id}/restore",
    tag = "user",
    summary = "Restore user",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Envelope<User>),
        (status = 400, description = "User is not deleted"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn restore_user(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .restore_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("User restored successfully", user))
}
