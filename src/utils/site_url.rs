//! Site URL resolution and host validation.
//!
//! Notification requests may carry absolute URLs or site-relative paths.
//! Both forms are resolved against the configured site base URL, and the
//! resolved host must equal the site host before anything is submitted to a
//! search engine. A mismatched host is a validation failure, never a silent
//! drop.

use url::Url;

/// Errors that can occur while resolving a URL against the site base.
#[derive(Debug, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL host '{host}' does not match site host '{expected}'")]
    HostMismatch { host: String, expected: String },

    #[error("Only HTTP and HTTPS URLs can be announced")]
    UnsupportedScheme,

    #[error("Site base URL has no host")]
    MissingHost,
}

/// Resolves a single URL (absolute or site-relative) against the site base.
///
/// # Resolution Rules
///
/// 1. Site-relative inputs (`/resources`, `resources/guide`) are joined
///    onto the base URL
/// 2. Absolute inputs are taken as-is
/// 3. The resolved URL must be HTTP(S)
/// 4. The resolved host must equal the base host (case-insensitive)
///
/// # Errors
///
/// Returns [`SiteUrlError::InvalidUrl`] for inputs that cannot be parsed,
/// [`SiteUrlError::UnsupportedScheme`] for non-HTTP(S) results, and
/// [`SiteUrlError::HostMismatch`] when the resolved host differs from the
/// site host.
pub fn resolve_site_url(base: &Url, input: &str) -> Result<String, SiteUrlError> {
    let expected = base.host_str().ok_or(SiteUrlError::MissingHost)?;

    let resolved = base.join(input).map_err(|e| SiteUrlError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    match resolved.scheme() {
        "http" | "https" => {}
        _ => return Err(SiteUrlError::UnsupportedScheme),
    }

    match resolved.host_str() {
        Some(host) if host.eq_ignore_ascii_case(expected) => Ok(resolved.to_string()),
        Some(host) => Err(SiteUrlError::HostMismatch {
            host: host.to_string(),
            expected: expected.to_string(),
        }),
        None => Err(SiteUrlError::HostMismatch {
            host: String::new(),
            expected: expected.to_string(),
        }),
    }
}

/// Resolves a batch of URLs all-or-nothing.
///
/// The first failing URL rejects the whole batch; callers use this for
/// batch submissions where partial transmission is not allowed.
pub fn resolve_site_urls(base: &Url, inputs: &[String]) -> Result<Vec<String>, SiteUrlError> {
    inputs.iter().map(|u| resolve_site_url(base, u)).collect()
}
