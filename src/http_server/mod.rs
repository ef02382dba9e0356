//! # HTTP Server Module
//!
//! Exposes the tracker pipeline over HTTP.
//!
//! # Endpoints
//!
//! - `GET /healthcheck` - Liveness check
//! - `GET /api/tracker` - List mobile food facilities
//! - `GET /api/tracker/:location_id` - Single facility by location id

pub mod health_routes;
pub mod request_log;
pub mod server;
pub mod tracker_routes;

pub use server::HttpServer;
