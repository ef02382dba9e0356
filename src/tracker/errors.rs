//! # Tracker Errors
//!
//! Only two conditions reach the caller: a missing record and an upstream
//! snapshot that could not be obtained. Everything else degrades locally.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::source::SourceError;

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker errors
#[derive(Debug, Error)]
pub enum TrackerError {
    /// No record carries the requested location id
    #[error("Mobile Food data with locationId {location_id} cannot be found.")]
    NotFound { location_id: String },

    /// The upstream snapshot could not be fetched or decoded
    #[error("Data source error: {0}")]
    DataSource(#[from] SourceError),
}

impl TrackerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::NotFound { .. } => StatusCode::NOT_FOUND,
            TrackerError::DataSource(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn not_found(location_id: impl Into<String>) -> Self {
        TrackerError::NotFound {
            location_id: location_id.into(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&TrackerError> for ErrorResponse {
    fn from(err: &TrackerError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
