//! IndexNow batch notification client.
//!
//! IndexNow is a multi-search-engine protocol for push-based crawl
//! notification: one POST to the aggregator endpoint fans the URL list out
//! to every participating engine. The whole list is a single submission
//! unit, so host validation is all-or-nothing and one result covers the
//! full batch.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use super::service::{IndexingNotifier, NotifyError};
use crate::domain::notification::NotificationResult;
use crate::utils::site_url::resolve_site_urls;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Request body for the IndexNow submission endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexNowPayload<'a> {
    host: &'a str,
    key: &'a str,
    key_location: &'a str,
    url_list: &'a [String],
}

/// Client for the IndexNow aggregator endpoint.
#[derive(Debug)]
pub struct IndexNowNotifier {
    client: Client,
    endpoint: Url,
    key: String,
    key_location: String,
    base_url: Url,
}

impl IndexNowNotifier {
    /// Production aggregator endpoint. Submissions are shared with every
    /// participating engine.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.indexnow.org/indexnow";

    /// Creates a notifier for `base_url` authenticated by `key`.
    ///
    /// The key must also be served by the site at `/{key}.txt`; the
    /// submission carries that location so engines can verify ownership.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Configuration`] if the key is empty or the
    /// base URL has no host.
    pub fn new(key: impl Into<String>, base_url: Url) -> Result<Self, NotifyError> {
        let key = key.into();
        if key.is_empty() {
            return Err(NotifyError::Configuration(
                "IndexNow key must not be empty".to_string(),
            ));
        }
        if base_url.host_str().is_none() {
            return Err(NotifyError::Configuration(format!(
                "site base URL '{base_url}' has no host"
            )));
        }

        let key_location = format!("{}/{}.txt", base_url.as_str().trim_end_matches('/'), key);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: Url::parse(Self::DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            key,
            key_location,
            base_url,
        })
    }

    /// Overrides the submission endpoint. Intended for tests.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Submits the batch, returning the resolved URL list on success.
    ///
    /// Exactly one outbound POST per invocation, or zero when validation
    /// rejects the batch.
    async fn submit(&self, urls: &[String]) -> Result<Vec<String>, NotifyError> {
        if urls.is_empty() {
            return Err(NotifyError::EmptyBatch);
        }

        let resolved = resolve_site_urls(&self.base_url, urls)?;

        // Host presence is guaranteed by the constructor.
        let host = self.base_url.host_str().unwrap_or_default();

        let payload = IndexNowPayload {
            host,
            key: &self.key,
            key_location: &self.key_location,
            url_list: &resolved,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(resolved);
        }

        Err(match status.as_u16() {
            400 => NotifyError::BadRequest,
            403 => NotifyError::InvalidKey,
            422 => NotifyError::UnprocessableEntity,
            429 => NotifyError::RateLimited,
            code => NotifyError::Http {
                status: code,
                body: response.text().await.unwrap_or_default(),
            },
        })
    }
}

#[async_trait]
impl IndexingNotifier for IndexNowNotifier {
    fn name(&self) -> &'static str {
        "indexnow"
    }

    async fn notify_url(&self, url: &str) -> NotificationResult {
        let batch = [url.to_string()];
        match self.submit(&batch).await {
            Ok(resolved) => NotificationResult::succeeded(self.name(), resolved),
            Err(e) => NotificationResult::failed(
                self.name(),
                batch.to_vec(),
                e.to_string(),
                e.status_code(),
            ),
        }
    }

    async fn notify_batch(&self, urls: &[String]) -> Vec<NotificationResult> {
        // One HTTP call and one result for the whole batch.
        let result = match self.submit(urls).await {
            Ok(resolved) => NotificationResult::succeeded(self.name(), resolved),
            Err(e) => NotificationResult::failed(
                self.name(),
                urls.to_vec(),
                e.to_string(),
                e.status_code(),
            ),
        };

        vec![result]
    }
}
