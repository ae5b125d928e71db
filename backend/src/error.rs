//! Error handling for the AgriSat mock backend
//!
//! Every failure is reported as `{"status": "error", "message": ...}`.

use std::any::Any;

use agrisat_shared::ResponseStatus;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request field is missing
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            detail: None,
            available_endpoints: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    available_endpoints: Some(crate::routes::available_endpoints()),
                    ..ErrorResponse::new("Endpoint not found")
                },
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg)),
        };

        // Log the error for debugging
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Error: {:?}", self),
            _ => tracing::warn!("Rejected request: {}", self),
        }

        (status, Json(body)).into_response()
    }
}

/// Render a handler panic as a 500 body.
///
/// The panic text is only exposed when `debug` is set.
pub fn panic_response(err: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("Handler panicked: {}", reason);

    let detail = if debug {
        reason
    } else {
        "Contact administrator".to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: Some(detail),
            ..ErrorResponse::new("Internal server error")
        }),
    )
        .into_response()
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
