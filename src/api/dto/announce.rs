//! DTOs for announcement endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::notification::NotificationResult;

/// Compiled regex for resource slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Request to announce a newly published resource.
#[derive(Debug, Deserialize, Validate)]
pub struct AnnounceResourceRequest {
    /// Slug of the published resource, as used in its public URL.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(
        path = "*SLUG_REGEX",
        message = "Slug may only contain lowercase letters, digits and dashes"
    ))]
    pub slug: String,
}

/// Request to announce an explicit list of URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct AnnounceUrlsRequest {
    /// Absolute or site-relative URLs to announce.
    #[validate(length(min = 1, max = 100))]
    pub urls: Vec<String>,
}

/// Response containing aggregated announcement results.
#[derive(Debug, Serialize)]
pub struct AnnounceResponse {
    pub summary: AnnounceSummary,
    pub results: Vec<NotificationResult>,
}

/// Summary counts across all notifiers.
#[derive(Debug, Serialize)]
pub struct AnnounceSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
