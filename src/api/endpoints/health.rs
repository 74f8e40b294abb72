//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct HealthCheckResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// `GET /health` — liveness check, no business logic.
pub async fn check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy",
        service: config::APP_NAME,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
