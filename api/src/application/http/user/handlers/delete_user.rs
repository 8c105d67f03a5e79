use axum::extract::State;
use serde::{Deserialize, Serialize};
use tasktrack_core::domain::user::ports::UserService;
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
pub struct DeleteUserResponse {
    pub id: i32,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "user",
    summary = "Delete user",
    description = "Soft-deletes a user. The row stays and can be restored.",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Envelope<DeleteUserResponse>),
        (status = 404, description = "User not found")
    ),
)]
pub async fn delete_user(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
) -> Result<Response<DeleteUserResponse>, ApiError> {
    state
        .service
        .delete_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok(
        "User deleted successfully",
        DeleteUserResponse { id: user_id },
    ))
}
