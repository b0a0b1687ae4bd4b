//! Search engine notifier trait and error taxonomy.

use async_trait::async_trait;

use crate::domain::notification::NotificationResult;
use crate::utils::site_url::SiteUrlError;

/// Errors produced while talking to a search engine notification API.
///
/// Only [`NotifyError::Configuration`] is ever returned from a public
/// constructor; everything else is folded into a failed
/// [`NotificationResult`] by the notify operations.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Credentials missing or unusable at construction time.
    #[error("Notifier misconfigured: {0}")]
    Configuration(String),

    /// Request rejected before any network call.
    #[error(transparent)]
    Validation(#[from] SiteUrlError),

    /// Submitted batch contained no URLs.
    #[error("URL list is empty")]
    EmptyBatch,

    #[error("Bad Request: malformed notification payload")]
    BadRequest,

    #[error("Forbidden: IndexNow key is invalid or missing")]
    InvalidKey,

    #[error("Unprocessable Entity: URLs don't belong to host or key mismatch")]
    UnprocessableEntity,

    #[error("Too Many Requests: notification rate limit exceeded")]
    RateLimited,

    #[error(
        "Unauthorized: service account is not permitted to use the Indexing API (HTTP {status})"
    )]
    Unauthorized { status: u16 },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network-level failure (DNS, timeout, connection reset).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    /// HTTP status associated with this error, when one was observed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::InvalidKey => Some(403),
            Self::UnprocessableEntity => Some(422),
            Self::RateLimited => Some(429),
            Self::Unauthorized { status } | Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A push-based search engine notification client.
///
/// Implementations must be thread-safe and must never fail the caller for
/// expected failure modes: every submission unit yields exactly one
/// [`NotificationResult`], errors included. Host validation against the
/// site base URL happens inside the implementation, before any network
/// call.
///
/// # Implementations
///
/// - [`crate::infrastructure::indexing::IndexNowNotifier`] - single-call
///   batch submission to the IndexNow aggregator
/// - [`crate::infrastructure::indexing::GoogleIndexingNotifier`] - per-URL
///   submission to the Google Indexing API
#[async_trait]
pub trait IndexingNotifier: Send + Sync {
    /// Stable name used in logs and aggregated results.
    fn name(&self) -> &'static str;

    /// Announces a single updated URL.
    async fn notify_url(&self, url: &str) -> NotificationResult;

    /// Announces every URL in the batch.
    ///
    /// Returns one result per submission unit: a single batch-wide result
    /// for batch-capable engines, one result per URL otherwise. A failing
    /// unit never aborts the remaining ones.
    async fn notify_batch(&self, urls: &[String]) -> Vec<NotificationResult>;
}
