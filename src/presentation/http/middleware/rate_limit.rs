// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::{Arc, OnceLock};
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::SmartIpKeyExtractor,
};

pub type WriteRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REPLENISH_PER_SECOND: u64 = 5;
const BURST_SIZE: u32 = 10;

fn write_config() -> Option<Arc<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>>> {
    static CONFIG: OnceLock<Option<Arc<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>>>> =
        OnceLock::new();

    CONFIG
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            builder.key_extractor(SmartIpKeyExtractor).finish().map(Arc::new)
        })
        .clone()
}

/// Per client IP limiter applied to the state changing routes. Keys come from
/// forwarding headers or the peer address, so the server must be started with
/// connect info.
pub fn write_rate_limit_layer() -> Option<WriteRateLimit> {
    let layer = write_config().map(GovernorLayer::new);
    if layer.is_none() {
        tracing::warn!("rate limit configuration rejected; writes are not throttled");
    }
    layer
}
