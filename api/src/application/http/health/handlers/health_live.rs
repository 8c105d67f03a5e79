use axum::extract::State;
use serde::{Deserialize, Serialize};
use tasktrack_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{Envelope, Response},
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness",
    description = "Pings the database and reports the round-trip latency.",
    responses(
        (status = 200, body = Envelope<HealthResponse>),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::ok("Service is healthy", HealthResponse { latency_ms }))
}
