//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for the announce API.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 20 requests
///
/// Publishing is a low-frequency event; a burst covers bulk re-announces
/// after a content migration. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .route("/announce", post(announce_resource_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(20)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
