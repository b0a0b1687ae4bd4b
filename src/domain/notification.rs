//! Notification result value objects.

use serde::Serialize;

/// Outcome of announcing one submission unit to one search engine.
///
/// IndexNow submits a whole batch in a single call and yields one result
/// carrying every URL; the Google Indexing API is notified one URL at a
/// time and yields one result per URL. Either way, every submission unit
/// produces exactly one result — failures populate the error field instead
/// of propagating.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResult {
    /// Name of the notifier that produced this result.
    pub notifier: &'static str,

    /// Fully resolved URLs covered by this result.
    pub urls: Vec<String>,

    pub success: bool,

    /// Human-readable failure description, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// HTTP status observed from the notification endpoint, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl NotificationResult {
    pub fn succeeded(notifier: &'static str, urls: Vec<String>) -> Self {
        Self {
            notifier,
            urls,
            success: true,
            error: None,
            status_code: None,
        }
    }

    pub fn failed(
        notifier: &'static str,
        urls: Vec<String>,
        error: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            notifier,
            urls,
            success: false,
            error: Some(error.into()),
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_has_no_error() {
        let result = NotificationResult::succeeded("indexnow", vec!["https://a.test/".to_string()]);
        assert!(result.success);
        assert!(result.error.is_none());
        assert!(result.status_code.is_none());
    }

    #[test]
    fn test_failed_carries_error_and_status() {
        let result = NotificationResult::failed(
            "google",
            vec!["https://a.test/".to_string()],
            "HTTP 500: boom",
            Some(500),
        );
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("HTTP 500: boom"));
        assert_eq!(result.status_code, Some(500));
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let result = NotificationResult::succeeded("indexnow", vec!["https://a.test/".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error").is_none());
        assert!(json.get("status_code").is_none());
        assert_eq!(json["notifier"], "indexnow");
    }
}
