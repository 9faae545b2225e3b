//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a short URL
//! - `GET  /{code}`  - Short URL redirect
//! - `GET  /health`  - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline

use crate::api::handlers::{create_short_url_handler, health_handler, redirect_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout_seconds` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout_seconds: u64) -> Router {
    Router::new()
        .route("/", post(create_short_url_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(timeout::layer(request_timeout_seconds))
        .layer(tracing::layer())
}
