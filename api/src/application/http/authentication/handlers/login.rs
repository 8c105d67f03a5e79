use axum::extract::State;
use tasktrack_core::domain::{
    authentication::{ports::AuthService, value_objects::LoginInput},
    user::entities::User,
};

use crate::application::http::{
    authentication::validators::LoginValidator,
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
    path = "/login",
    tag = "auth",
    summary = "Login",
    description = "Checks credentials against an active user. Identifiers containing `@` are matched against the email, anything else against the username.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = Envelope<User>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .login(LoginInput {
            identifier: payload.identifier,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::ok("Login successful", user))
}
