//! Car endpoints
//!
//! Absence is an empty array, not a 404. Store failures become a single
//! 500 response and the handler returns normally.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{CarId, CarPayload};
use crate::http::server::AppState;
use crate::models::{Car, InsertAck};

const FETCH_FAILED: &str = "Error fetching cars from database";
const INSERT_FAILED: &str = "Error adding car to database";

/// Insert acknowledgment
#[derive(Serialize)]
pub struct CarAddedResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub ack: InsertAck,
}

/// GET /api/cars - list all cars
async fn list_cars(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Car>>, ApiError> {
    let cars = state
        .store
        .list_all()
        .await
        .map_err(ApiError::store(FETCH_FAILED))?;
    Ok(Json(cars))
}

/// GET /api/cars/{id} - zero or one car
async fn get_car(
    State(state): State<Arc<AppState>>,
    CarId(id): CarId,
) -> Result<Json<Vec<Car>>, ApiError> {
    let cars = state
        .store
        .fetch_by_id(id)
        .await
        .map_err(ApiError::store(FETCH_FAILED))?;
    Ok(Json(cars))
}

/// POST /api/cars - add a car
async fn add_car(
    State(state): State<Arc<AppState>>,
    CarPayload(car): CarPayload,
) -> Result<Json<CarAddedResponse>, ApiError> {
    let ack = state
        .store
        .insert(car)
        .await
        .map_err(ApiError::store(INSERT_FAILED))?;

    tracing::info!(id = ack.id, "car added");
    Ok(Json(CarAddedResponse {
        message: "Car added to database",
        ack,
    }))
}

/// Car routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cars", get(list_cars).post(add_car))
        // Trailing slash is advertised by the welcome message
        .route("/api/cars/", get(list_cars).post(add_car))
        .route("/api/cars/{id}", get(get_car))
}
