//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for the API.
///
/// # Limits
///
/// - **Rate**: one token every `1 / per_second` seconds
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Zero values
/// are raised to 1.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be run with connect info.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/events", post(event_handler))
///     .layer(rate_limit::layer(10, 100));
/// ```
pub fn layer(per_second: u64, burst: u32) -> RateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    builder.burst_size(burst.max(1));

    // `per_second` is the replenish interval in the builder, so convert the
    // rate into a period.
    let period_ms = (1000 / per_second.max(1)).max(1);
    builder.per_millisecond(period_ms);

    let governor_conf = builder
        .finish()
        .expect("burst and period are clamped to at least 1");

    GovernorLayer::new(Arc::new(governor_conf))
}
