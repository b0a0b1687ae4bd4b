//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{announce_resource_handler, announce_urls_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /announce`      - Announce a published resource (3-URL page set)
/// - `POST /announce/urls` - Announce an explicit URL list
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/announce", post(announce_resource_handler))
        .route("/announce/urls", post(announce_urls_handler))
}
