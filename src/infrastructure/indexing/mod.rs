//! Search engine crawl notification clients.
//!
//! Two parallel, structurally identical notifiers sit behind the
//! [`IndexingNotifier`] trait:
//!
//! - [`IndexNowNotifier`] - single-call batch submission to the IndexNow
//!   aggregator, authenticated by a shared key
//! - [`GoogleIndexingNotifier`] - per-URL submission to the Google Indexing
//!   API, authenticated by a service-account JWT
//!
//! The notifiers do not share state or coordinate ordering; each produces
//! its own result set.

pub mod google;
pub mod indexnow;
pub mod service;

pub use google::{AccessTokenProvider, GoogleIndexingNotifier, ServiceAccountTokenProvider};
pub use indexnow::IndexNowNotifier;
pub use service::{IndexingNotifier, NotifyError};
