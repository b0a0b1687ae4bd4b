//! Best-effort publish-time announcement fan-out.

use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use crate::domain::notification::NotificationResult;
use crate::domain::resource::ResourcePages;
use crate::infrastructure::indexing::IndexingNotifier;

/// Aggregated outcome of one announcement fan-out.
#[derive(Debug, Default)]
pub struct AnnounceOutcome {
    /// One entry per submission unit, in fan-out order.
    pub results: Vec<NotificationResult>,
}

impl AnnounceOutcome {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }
}

/// Fans announcements out to every configured search engine notifier.
///
/// Best-effort by contract: a notification failure is logged and folded
/// into the aggregate, never surfaced as an error. Content publishing must
/// not depend on indexing succeeding, so neither announce operation can
/// fail.
///
/// Notifiers are injected once at startup and reused for the process
/// lifetime. When the site base URL or every notifier is unconfigured,
/// announcements degrade to a logged no-op.
pub struct AnnounceService {
    base_url: Option<Url>,
    notifiers: Vec<Arc<dyn IndexingNotifier>>,
}

impl AnnounceService {
    pub fn new(base_url: Option<Url>, notifiers: Vec<Arc<dyn IndexingNotifier>>) -> Self {
        Self { base_url, notifiers }
    }

    /// Names of the configured notifiers, in fan-out order.
    pub fn notifier_names(&self) -> Vec<&'static str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Announces a newly published resource and its listing/category pages.
    ///
    /// Builds the fixed page set for the slug (item page, resources
    /// listing, category index) and submits it to every notifier.
    pub async fn announce_resource(&self, slug: &str) -> AnnounceOutcome {
        let Some(base_url) = &self.base_url else {
            warn!("Site base URL not configured; skipping announcement for '{slug}'");
            return AnnounceOutcome::default();
        };

        let pages = ResourcePages::for_slug(base_url, slug);
        info!("Announcing published resource '{slug}'");

        self.announce_urls(pages.urls()).await
    }

    /// Announces an explicit list of URLs to every configured notifier.
    ///
    /// Notifiers run sequentially and independently; one notifier failing
    /// never prevents the next from being attempted.
    pub async fn announce_urls(&self, urls: Vec<String>) -> AnnounceOutcome {
        if self.notifiers.is_empty() {
            warn!("No search engine notifiers configured; skipping announcement");
            return AnnounceOutcome::default();
        }

        let mut outcome = AnnounceOutcome::default();

        for notifier in &self.notifiers {
            let results = notifier.notify_batch(&urls).await;

            for result in &results {
                if result.success {
                    info!(
                        "Notification accepted by {} for {}",
                        result.notifier,
                        result.urls.join(", ")
                    );
                } else {
                    warn!(
                        "Notification via {} failed for {} (status {:?}): {}",
                        result.notifier,
                        result.urls.join(", "),
                        result.status_code,
                        result.error.as_deref().unwrap_or("unknown error")
                    );
                }
            }

            outcome.results.extend(results);
        }

        info!(
            "Announcement complete: {} total, {} successful, {} failed",
            outcome.total(),
            outcome.successful(),
            outcome.failed()
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationResult;

    #[test]
    fn test_outcome_counts() {
        let outcome = AnnounceOutcome {
            results: vec![
                NotificationResult::succeeded("indexnow", vec!["https://a.test/x".to_string()]),
                NotificationResult::failed(
                    "google",
                    vec!["https://a.test/x".to_string()],
                    "HTTP 500: boom",
                    Some(500),
                ),
            ],
        };

        assert_eq!(outcome.total(), 2);
        assert_eq!(outcome.successful(), 1);
        assert_eq!(outcome.failed(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_base_url_is_a_noop() {
        let service = AnnounceService::new(None, Vec::new());
        let outcome = service.announce_resource("some-guide").await;
        assert_eq!(outcome.total(), 0);
    }
}
