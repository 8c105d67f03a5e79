use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tasktrack_core::domain::common::entities::app_errors::CoreError;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Numeric `{id}` path segment; anything else is an `InvalidIdError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(CoreError::InvalidId))?;

        raw.trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(IdPath)
            .ok_or(ApiError::from(CoreError::InvalidId))
    }
}
