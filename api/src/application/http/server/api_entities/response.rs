use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Body of every successful response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(Envelope<T>),
    Created(Envelope<T>),
}

impl<T: Serialize + PartialEq> Response<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Response::OK(Envelope::success(message, data))
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Response::Created(Envelope::success(message, data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
            Response::Created(envelope) => (StatusCode::CREATED, Json(envelope)).into_response(),
        }
    }
}
