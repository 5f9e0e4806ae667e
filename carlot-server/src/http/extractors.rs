//! Custom Axum extractors
//!
//! Rejections from axum's own `Path` and `Json` extractors become
//! [`ApiError::Validation`] so every error body is JSON.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{NewCar, ValidationError};

/// Extract and validate a numeric car id from path.
///
/// Non-numeric ids are rejected before any statement is built.
pub struct CarId(pub i64);

impl<S> FromRequestParts<S> for CarId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        let id = id.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// Extract and validate a car insert request from a JSON body
pub struct CarPayload(pub NewCar);

impl<S> FromRequest<S> for CarPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(NewCar::from_json(&body)?))
    }
}
