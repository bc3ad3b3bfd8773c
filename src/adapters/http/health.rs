//! Liveness endpoint.

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
