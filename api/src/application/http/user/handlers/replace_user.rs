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
    user::validators::ReplaceUserValidator,
};

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "user",
    summary = "Replace user",
    description = "Full update: every profile field is required. The password changes only when given.",
    params(
        ("id" = i32, Path, description = "User ID"),
    ),
    request_body = ReplaceUserValidator,
    responses(
        (status = 200, body = Envelope<User>),
        (status = 400, description = "Validation failed, or email/username already taken"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn replace_user(
    IdPath(user_id): IdPath,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReplaceUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            first_name: Some(payload.first_name),
            last_name: Some(payload.last_name),
            email: Some(payload.email),
            username: Some(payload.username),
            password: payload.password,
            role: Some(payload.role),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("User updated successfully", user))
}
