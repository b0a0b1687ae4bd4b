//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with per-notifier configuration state.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: at least one notifier is configured
/// - **503 Service Unavailable**: no notifier configured — the service can
///   still serve the key file, but every announcement is a no-op
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "indexnow": { "status": "ok", "message": "Configured" },
///     "google_indexing": { "status": "disabled", "message": "Credentials not configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let names = state.announce_service.notifier_names();

    let indexnow = check_notifier(&names, "indexnow");
    let google_indexing = check_notifier(&names, "google");

    let any_enabled = !names.is_empty();

    let response = HealthResponse {
        status: if any_enabled { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            indexnow,
            google_indexing,
        },
    };

    if any_enabled {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports whether a notifier is present in the fan-out set.
fn check_notifier(names: &[&'static str], name: &str) -> CheckStatus {
    if names.iter().any(|n| *n == name) {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "disabled".to_string(),
            message: Some("Credentials not configured".to_string()),
        }
    }
}
