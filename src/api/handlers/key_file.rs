//! Handler for the IndexNow key verification file.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Serves the IndexNow key file used for ownership verification.
///
/// # Endpoint
///
/// `GET /{file}`
///
/// IndexNow participants verify that the submitting party controls the
/// host by fetching `/{key}.txt` and comparing its body to the submitted
/// key.
///
/// # Responses
///
/// - **200 OK**: `file` is exactly `{key}.txt` for the configured key;
///   body is the key as plaintext, cacheable for 24 hours
/// - **404 Not Found**: key unconfigured or filename mismatch
pub async fn key_file_handler(
    Path(file): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let key = state
        .indexnow_key
        .as_ref()
        .ok_or_else(|| AppError::not_found("Not found", json!({})))?;

    if file != format!("{key}.txt") {
        return Err(AppError::not_found("Not found", json!({})));
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        key.clone(),
    ))
}
