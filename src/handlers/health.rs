//! GET /health — health check.

use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

pub async fn health() -> Json<HealthResponse> {
    info!("Health check performed");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
