//! # Tracker Routes
//!
//! Thin HTTP wrappers over [`TrackerService`]. Query parameters are passed
//! through as a map and interpreted by [`ListQuery::from_params`].

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::tracker::{ListQuery, ResponseRecord, TrackerError, TrackerService};

/// Build the tracker router
pub fn tracker_routes(service: TrackerService) -> Router {
    Router::new()
        .route("/api/tracker", get(list_handler))
        .route("/api/tracker/:location_id", get(get_handler))
        .with_state(service)
}

/// List mobile food facilities
async fn list_handler(
    State(service): State<TrackerService>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ResponseRecord>>, TrackerError> {
    let query = ListQuery::from_params(&params);
    let records = service.list(&query).await?;
    Ok(Json(records))
}

/// Single mobile food facility by location id
async fn get_handler(
    State(service): State<TrackerService>,
    Path(location_id): Path<String>,
) -> Result<Json<ResponseRecord>, TrackerError> {
    let record = service.get_by_location_id(&location_id).await?;
    Ok(Json(record))
}
