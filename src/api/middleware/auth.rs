//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates announce API requests with the static service token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The expected token is `ANNOUNCE_TOKEN` from the environment. A single
/// service-wide credential is enough here: the only caller is the content
/// publish workflow.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token does not match the configured value
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    if token != st.announce_token {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid token"}),
        ));
    }

    Ok(next.run(req).await)
}
