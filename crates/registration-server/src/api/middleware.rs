//! Request logging middleware.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Log method, route, status and duration of each request.
///
/// The matched route template is logged rather than the raw URI, so
/// session IDs stay out of the request log.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let start = std::time::Instant::now();

    debug!(%method, %route, "Request started");

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        debug!(%method, %route, %status, ?duration, "Request completed");
    } else if status.is_server_error() {
        warn!(%method, %route, %status, ?duration, "Request failed");
    } else {
        debug!(%method, %route, %status, ?duration, "Request rejected");
    }

    response
}
