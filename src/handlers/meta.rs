use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

use crate::types::api::HealthStatus;

const SERVICE_NAME: &str = "Treasure Hunt API";

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Treasure Hunt Login System API" }))
}

/// Liveness endpoint for uptime monitoring. Never fails.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}
