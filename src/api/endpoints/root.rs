//! Root endpoint — service metadata.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// `GET /` — service name, version, and endpoint index.
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "भारतीय स्वास्थ्य सहायक बैकएंड सेवा",
        version: config::APP_VERSION,
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/process-health-query",
                description: "Process health queries",
            },
            EndpointInfo {
                method: "GET",
                path: "/health",
                description: "Health check",
            },
        ],
    })
}
