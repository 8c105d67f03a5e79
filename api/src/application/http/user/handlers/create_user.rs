use axum::extract::State;
use tasktrack_core::domain::user::{
    entities::User, ports::UserService, value_objects::CreateUserInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{Envelope, Response},
        },
        app_state::AppState,
    },
    user::validators::CreateUserValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    description = "Creates a user. Email and username must be unused, soft-deleted users included.",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = Envelope<User>),
        (status = 400, description = "Validation failed, or email/username already taken")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            username: payload.username,
            password: payload.password,
            role: payload.role,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::created("User created successfully", user))
}
