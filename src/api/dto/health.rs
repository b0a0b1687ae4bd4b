//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with per-notifier status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Configuration state of each notifier.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub indexnow: CheckStatus,
    pub google_indexing: CheckStatus,
}

/// Individual component status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
