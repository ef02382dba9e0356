//! Health check route.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheckResponse {
    /// Milliseconds since the Unix epoch
    pub date: i64,
    pub status: String,
    pub response_type: String,
}

impl HealthCheckResponse {
    pub fn ok() -> Self {
        Self {
            date: Utc::now().timestamp_millis(),
            status: "OK".to_string(),
            response_type: "HealthCheckResponse".to_string(),
        }
    }
}

pub fn health_routes() -> Router {
    Router::new().route("/healthcheck", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthCheckResponse::ok()))
}
