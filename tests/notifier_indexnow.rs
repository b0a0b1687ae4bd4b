use mockito::Matcher;
use serde_json::json;
use url::Url;

use crawl_notify::infrastructure::indexing::{IndexNowNotifier, IndexingNotifier};

fn notifier(endpoint: &str) -> IndexNowNotifier {
    IndexNowNotifier::new("abc123", Url::parse("https://praxisnotes.com").unwrap())
        .unwrap()
        .with_endpoint(Url::parse(endpoint).unwrap())
}

#[tokio::test]
async fn test_batch_success_is_a_single_post() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/indexnow")
        .match_body(Matcher::PartialJson(json!({
            "host": "praxisnotes.com",
            "key": "abc123",
            "keyLocation": "https://praxisnotes.com/abc123.txt",
            "urlList": [
                "https://praxisnotes.com/resources/guide",
                "https://praxisnotes.com/resources",
            ],
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let results = notifier
        .notify_batch(&["/resources/guide".to_string(), "/resources".to_string()])
        .await;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert!(results[0].success);
    assert_eq!(
        results[0].urls,
        vec![
            "https://praxisnotes.com/resources/guide",
            "https://praxisnotes.com/resources",
        ]
    );
}

#[tokio::test]
async fn test_host_mismatch_rejects_batch_without_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/indexnow")
        .expect(0)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let results = notifier
        .notify_batch(&[
            "https://praxisnotes.com/resources".to_string(),
            "https://evil.example.com/resources".to_string(),
        ])
        .await;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
    assert!(
        results[0]
            .error
            .as_deref()
            .unwrap()
            .contains("does not match site host")
    );
}

#[tokio::test]
async fn test_empty_batch_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/indexnow")
        .expect(0)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let results = notifier.notify_batch(&[]).await;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
    assert_eq!(results[0].error.as_deref(), Some("URL list is empty"));
}

#[tokio::test]
async fn test_422_maps_to_host_key_mismatch_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/indexnow")
        .with_status(422)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let result = notifier.notify_url("/resources").await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Unprocessable Entity: URLs don't belong to host or key mismatch")
    );
    assert_eq!(result.status_code, Some(422));
}

#[tokio::test]
async fn test_403_maps_to_invalid_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/indexnow")
        .with_status(403)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let result = notifier.notify_url("/resources").await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Forbidden: IndexNow key is invalid or missing")
    );
    assert_eq!(result.status_code, Some(403));
}

#[tokio::test]
async fn test_429_maps_to_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/indexnow")
        .with_status(429)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let result = notifier.notify_url("/resources").await;

    assert!(!result.success);
    assert_eq!(result.status_code, Some(429));
}

#[tokio::test]
async fn test_unmapped_status_reports_generic_http_error_with_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/indexnow")
        .with_status(500)
        .with_body("backend exploded")
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let result = notifier.notify_url("/resources").await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("HTTP 500: backend exploded"));
    assert_eq!(result.status_code, Some(500));
}

#[tokio::test]
async fn test_connection_failure_is_reported_not_thrown() {
    // Nothing listens on the endpoint, so the request fails at the
    // transport level.
    let notifier = notifier("http://127.0.0.1:1/indexnow");
    let result = notifier.notify_url("/resources").await;

    assert!(!result.success);
    assert!(result.error.as_deref().unwrap().starts_with("Request failed"));
}

#[tokio::test]
async fn test_single_url_convenience_wraps_batch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/indexnow")
        .match_body(Matcher::PartialJson(json!({
            "urlList": ["https://praxisnotes.com/resources/new-guide"],
        })))
        .with_status(202)
        .expect(1)
        .create_async()
        .await;

    let notifier = notifier(&format!("{}/indexnow", server.url()));
    let result = notifier.notify_url("/resources/new-guide").await;

    mock.assert_async().await;
    assert!(result.success);
}
