//! Handlers for announcement endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::announce::{
    AnnounceResourceRequest, AnnounceResponse, AnnounceSummary, AnnounceUrlsRequest,
};
use crate::application::services::AnnounceOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Announces a newly published resource to all configured search engines.
///
/// # Endpoint
///
/// `POST /api/announce`
///
/// # Request Body
///
/// ```json
/// { "slug": "aba-data-collection-guide" }
/// ```
///
/// # Behavior
///
/// Builds the resource's page set (item page, resources listing, category
/// index) and submits it to every configured notifier. Always returns
/// 200 OK: notification failures are reported per result, never as an HTTP
/// error, so the publish workflow cannot be failed by indexing.
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 4, "successful": 3, "failed": 1 },
///   "results": [
///     { "notifier": "indexnow", "urls": ["..."], "success": true },
///     { "notifier": "google", "urls": ["..."], "success": false,
///       "error": "HTTP 500: backend error", "status_code": 500 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the slug fails validation.
pub async fn announce_resource_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnnounceResourceRequest>,
) -> Result<Json<AnnounceResponse>, AppError> {
    payload.validate()?;

    let outcome = state.announce_service.announce_resource(&payload.slug).await;

    Ok(Json(to_response(outcome)))
}

/// Announces an explicit list of URLs to all configured search engines.
///
/// # Endpoint
///
/// `POST /api/announce/urls`
///
/// # Request Body
///
/// ```json
/// { "urls": ["/resources", "https://praxisnotes.com/resources/categories"] }
/// ```
///
/// URLs may be absolute or site-relative; each notifier resolves and
/// validates them against the configured site host.
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty or exceeds 100 entries.
pub async fn announce_urls_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnnounceUrlsRequest>,
) -> Result<Json<AnnounceResponse>, AppError> {
    payload.validate()?;

    let outcome = state.announce_service.announce_urls(payload.urls).await;

    Ok(Json(to_response(outcome)))
}

/// Folds an outcome into the wire format.
fn to_response(outcome: AnnounceOutcome) -> AnnounceResponse {
    AnnounceResponse {
        summary: AnnounceSummary {
            total: outcome.total(),
            successful: outcome.successful(),
            failed: outcome.failed(),
        },
        results: outcome.results,
    }
}
