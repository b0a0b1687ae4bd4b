#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crawl_notify::application::services::AnnounceService;
use crawl_notify::domain::notification::NotificationResult;
use crawl_notify::infrastructure::indexing::IndexingNotifier;
use crawl_notify::state::AppState;

pub const TEST_TOKEN: &str = "test-announce-token";

pub fn base_url() -> Url {
    Url::parse("https://praxisnotes.com").unwrap()
}

/// Notifier stub that records every submitted URL and produces one result
/// per URL, failing the URLs it was told to fail.
pub struct StubNotifier {
    name: &'static str,
    failing: Vec<String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl StubNotifier {
    pub fn succeeding(name: &'static str) -> Self {
        Self {
            name,
            failing: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(name: &'static str, urls: &[&str]) -> Self {
        Self {
            name,
            failing: urls.iter().map(|u| u.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every URL submitted across all calls, in submission order.
    pub fn submitted_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl IndexingNotifier for StubNotifier {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn notify_url(&self, url: &str) -> NotificationResult {
        self.calls.lock().unwrap().push(vec![url.to_string()]);

        if self.failing.iter().any(|f| f == url) {
            NotificationResult::failed(
                self.name,
                vec![url.to_string()],
                "stub failure",
                Some(500),
            )
        } else {
            NotificationResult::succeeded(self.name, vec![url.to_string()])
        }
    }

    async fn notify_batch(&self, urls: &[String]) -> Vec<NotificationResult> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            results.push(self.notify_url(url).await);
        }
        results
    }
}

pub fn create_test_state(
    notifiers: Vec<Arc<dyn IndexingNotifier>>,
    indexnow_key: Option<&str>,
) -> AppState {
    AppState {
        announce_service: Arc::new(AnnounceService::new(Some(base_url()), notifiers)),
        indexnow_key: indexnow_key.map(|k| k.to_string()),
        announce_token: TEST_TOKEN.to_string(),
    }
}
