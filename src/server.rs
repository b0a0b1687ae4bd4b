//! HTTP server initialization and runtime setup.
//!
//! Builds the configured notifiers, wires shared state, and runs the Axum
//! server lifecycle.

use crate::application::services::AnnounceService;
use crate::config::Config;
use crate::infrastructure::indexing::{GoogleIndexingNotifier, IndexNowNotifier, IndexingNotifier};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builds the announcement fan-out service from configuration.
///
/// Each notifier whose credentials are absent or unusable is skipped with
/// a logged warning: indexing is optional infrastructure, and a missing
/// key must never prevent the service from starting.
///
/// # Errors
///
/// Returns an error only for an unparseable `SITE_BASE_URL`; notifier
/// construction failures degrade to disabled notifiers.
pub fn build_announce_service(config: &Config) -> Result<AnnounceService> {
    let base_url = match &config.site_base_url {
        Some(raw) => Some(
            Url::parse(raw).with_context(|| format!("invalid SITE_BASE_URL '{raw}'"))?,
        ),
        None => {
            tracing::warn!("SITE_BASE_URL not set; all indexing notifications disabled");
            None
        }
    };

    let mut notifiers: Vec<Arc<dyn IndexingNotifier>> = Vec::new();

    if let Some(base_url) = &base_url {
        match &config.indexnow_key {
            Some(key) => match IndexNowNotifier::new(key.clone(), base_url.clone()) {
                Ok(notifier) => {
                    tracing::info!("IndexNow notifications enabled");
                    notifiers.push(Arc::new(notifier));
                }
                Err(e) => tracing::warn!("IndexNow notifications disabled: {e}"),
            },
            None => tracing::info!("INDEXNOW_KEY not set; IndexNow notifications disabled"),
        }

        match (
            &config.google_service_account_email,
            &config.google_private_key,
        ) {
            (Some(email), Some(private_key)) => {
                let delay = Duration::from_millis(config.google_notify_delay_ms);
                match GoogleIndexingNotifier::new(email.clone(), private_key, base_url.clone(), delay)
                {
                    Ok(notifier) => {
                        tracing::info!("Google Indexing API notifications enabled");
                        notifiers.push(Arc::new(notifier));
                    }
                    Err(e) => tracing::warn!("Google Indexing API notifications disabled: {e}"),
                }
            }
            (None, None) => tracing::info!(
                "Google service account not set; Google Indexing API notifications disabled"
            ),
            _ => tracing::warn!(
                "GOOGLE_SERVICE_ACCOUNT_EMAIL and GOOGLE_PRIVATE_KEY must both be set; \
                 Google Indexing API notifications disabled"
            ),
        }
    }

    Ok(AnnounceService::new(base_url, notifiers))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Search engine notifiers (per available credentials)
/// - Shared application state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - `ANNOUNCE_TOKEN` is missing
/// - The listen address is invalid or the bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let announce_token = config
        .announce_token
        .clone()
        .context("ANNOUNCE_TOKEN must be set")?;

    let announce_service = Arc::new(build_announce_service(&config)?);

    let state = AppState {
        announce_service,
        indexnow_key: config.indexnow_key.clone(),
        announce_token,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
