use std::sync::Arc;

use crate::application::services::AnnounceService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub announce_service: Arc<AnnounceService>,
    /// IndexNow key served at `/{key}.txt`; `None` when IndexNow is disabled.
    pub indexnow_key: Option<String>,
    /// Static bearer token protecting the announce API.
    pub announce_token: String,
}
