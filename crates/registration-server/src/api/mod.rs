//! HTTP API and form page for the registration service.

mod handlers;
mod middleware;
mod page;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use page::index;
pub use types::*;

use crate::session::SessionStore;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sms_gateway::CodeSender;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Live registration sessions
    pub sessions: SessionStore,
    /// Channel used to deliver one-time codes
    pub sender: Arc<dyn CodeSender>,
}

impl AppState {
    /// Create new application state.
    pub fn new(sessions: SessionStore, sender: Arc<dyn CodeSender>) -> Self {
        Self { sessions, sender }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/health", get(handlers::health))
        .route("/v1/sessions", post(handlers::create_session))
        .route(
            "/v1/sessions/:id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/v1/sessions/:id/phone", post(handlers::submit_phone))
        .route("/v1/sessions/:id/otp", post(handlers::submit_otp))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the API router, accepting cross-origin requests from anywhere.
pub fn create_router_with_cors(state: AppState) -> Router {
    create_router(state).layer(CorsLayer::permissive())
}
