//! # HTTP Server
//!
//! Combines the tracker and health routers behind request logging and a
//! CORS layer.

use std::net::SocketAddr;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::TrackerConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::tracker::TrackerService;

use super::health_routes::health_routes;
use super::request_log::log_request;
use super::tracker_routes::tracker_routes;

/// HTTP server for the tracker API
pub struct HttpServer {
    config: TrackerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: TrackerConfig, service: TrackerService) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router(config: &TrackerConfig, service: TrackerService) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(tracker_routes(service))
            .layer(middleware::from_fn(log_request))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await
    }
}
