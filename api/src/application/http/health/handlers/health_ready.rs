use axum::extract::State;
use tasktrack_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Envelope, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness",
    description = "Reports whether the database accepts queries. An offline database is reported, not raised.",
    responses(
        (status = 200, body = Envelope<DatabaseHealthStatus>),
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    let message = if status.online {
        "Database is ready"
    } else {
        "Database is offline"
    };

    Ok(Response::ok(message, status))
}
