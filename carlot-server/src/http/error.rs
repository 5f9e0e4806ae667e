//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged here and never propagate past the handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No route matched (404)
    NotFound { path: String },

    /// Database error (500, logged). `message` is what the client sees.
    Store {
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure with a client-facing message.
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { path } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("no route for '{}'", path)
                }),
            ),
            Self::Store { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "store_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
