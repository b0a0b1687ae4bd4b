//! Top-level router configuration combining public and API routes.
//!
//! # Route Structure
//!
//! - `GET  /{file}`  - IndexNow key verification file (public)
//! - `GET  /health`  - Health check: notifier configuration state (public)
//! - `/api/*`        - Announce API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the announce API
//! - **Authentication** - Bearer token on the announce API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, key_file_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer());

    let router = Router::new()
        .route("/{file}", get(key_file_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
