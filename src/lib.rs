//! # crawl-notify
//!
//! Search engine crawl notification service for the PraxisNotes content
//! platform, built with Axum.
//!
//! When the site publishes a new resource, the publish workflow calls this
//! service, which announces the affected pages over two push channels:
//!
//! - **IndexNow** - one batch POST to the aggregator endpoint
//! - **Google Indexing API** - authenticated per-URL notifications
//!
//! Notification is best-effort by contract: failures are logged and
//! aggregated, and can never fail the publish workflow that triggered
//! them. Missing credentials degrade the corresponding notifier to a
//! logged no-op.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - notification result and page-set value objects
//! - **Application Layer** ([`application`]) - the best-effort announcement fan-out
//! - **Infrastructure Layer** ([`infrastructure`]) - IndexNow and Google Indexing API clients
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set environment variables (missing ones disable the notifier)
//! export SITE_BASE_URL="https://praxisnotes.com"
//! export INDEXNOW_KEY="<shared secret>"
//! export ANNOUNCE_TOKEN="<api bearer token>"
//!
//! # Start the service
//! cargo run
//!
//! # Or re-announce a resource manually
//! cargo run --bin announce -- resource aba-data-collection-guide
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnnounceOutcome, AnnounceService};
    pub use crate::domain::notification::NotificationResult;
    pub use crate::domain::resource::ResourcePages;
    pub use crate::error::AppError;
    pub use crate::infrastructure::indexing::{
        GoogleIndexingNotifier, IndexNowNotifier, IndexingNotifier, NotifyError,
    };
    pub use crate::state::AppState;
}
