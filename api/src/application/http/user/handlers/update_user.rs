use axum::extract::State;
use tasktrack_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateUserInput,
};

use crate::application::http::{
    path::IdPath,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
    user::validators::UpdateUserValidator,
};

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "user",
    summary = "Update user",
    description = "Partially updates a user; omitted fields keep their value.",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = Envelope<User>),
        (status = 400, description = "Validation failed, or email/username already taken"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn update_user(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            username: payload.username,
            password: payload.password,
            role: payload.role,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("User updated successfully", user))
}
