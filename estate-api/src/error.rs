//! API Error types
//!
//! Responses never carry internal detail: the cause is logged and the body
//! is a fixed code.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use estate_core::ServiceError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ApiError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        ApiError::NotFound(what.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::NotFound(what) => {
                tracing::debug!(resource = %what, "Resource not found");
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::BadRequest(reason) => {
                tracing::warn!(reason = %reason, "Malformed request");
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Service(e) if e.is_client_error() => {
                tracing::warn!(code = e.code(), error = %e, "Request rejected");
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Service(e) => {
                tracing::error!(code = e.code(), error = %e, "Request failed");
                (StatusCode::BAD_REQUEST, "bad_request")
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
