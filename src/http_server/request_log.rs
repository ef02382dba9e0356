//! Per-request log line.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::{log_event_with_fields, Event};

/// Log method, path, status and elapsed time of every request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    let elapsed_ms = started.elapsed().as_millis().to_string();
    log_event_with_fields(
        Event::HttpRequest,
        &[
            ("elapsed_ms", elapsed_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status.as_str()),
        ],
    );
    response
}
