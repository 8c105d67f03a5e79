use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tasktrack_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

use super::response::EnvelopeStatus;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request body failed validation; carries the per-field report.
    #[error("Validation failed")]
    Validation(Value),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(err) => {
                StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Core(err) => err.code(),
            ApiError::Validation(_) => "ValidationError",
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            ApiError::Core(err) => err.details().map(Value::String),
            ApiError::Validation(details) => Some(details.clone()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorDetail {
    pub code: String,
    pub details: Option<Value>,
}

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub status: EnvelopeStatus,
    pub message: String,
    pub error: ErrorDetail,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), "request failed: {}", self);
        }

        let body = ApiErrorResponse {
            status: EnvelopeStatus::Error,
            message: self.to_string(),
            error: ErrorDetail {
                code: self.code().to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(Value::String(rejection.body_text())))?;

        value.validate().map_err(|errors| {
            ApiError::Validation(serde_json::to_value(&errors).unwrap_or(Value::Null))
        })?;

        Ok(ValidateJson(value))
    }
}
