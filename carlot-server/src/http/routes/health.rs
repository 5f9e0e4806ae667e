//! Health check endpoint
//!
//! Reports whether the car store answers a row count. The process itself is
//! always up if this responds, so a store failure is 503, not 500.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store.count().await {
        Ok(_) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!("health check: store unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
