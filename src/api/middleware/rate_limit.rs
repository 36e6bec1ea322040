//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result, ensure};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter.
///
/// Each client starts with `burst` tokens and regains one token every
/// `1s / per_second`, so the sustained rate is `per_second` requests per
/// second. Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address taken from the socket peer
/// address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero, or if `per_second`
/// exceeds one token per nanosecond.
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .period(replenish_period(per_second)?)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Interval after which one token is returned to a client's bucket.
fn replenish_period(per_second: u64) -> Result<Duration> {
    ensure!(per_second > 0, "Rate limit must be at least 1 request per second");

    let nanos = 1_000_000_000 / per_second;
    ensure!(nanos > 0, "Rate limit of {per_second} requests per second is too high");

    Ok(Duration::from_nanos(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_rejects_zero_burst() {
        assert!(layer(10, 0).is_err());
    }

    #[test]
    fn test_layer_rejects_zero_rate() {
        assert!(layer(0, 50).is_err());
    }

    #[test]
    fn test_layer_accepts_valid_limits() {
        assert!(layer(10, 50).is_ok());
    }

    #[test]
    fn test_replenish_period_is_inverse_of_rate() {
        assert_eq!(replenish_period(1).unwrap(), Duration::from_secs(1));
        assert_eq!(replenish_period(10).unwrap(), Duration::from_millis(100));
        assert_eq!(replenish_period(1000).unwrap(), Duration::from_millis(1));
    }

    #[test]
    fn test_replenish_period_rejects_sub_nanosecond_rate() {
        assert!(replenish_period(2_000_000_000).is_err());
    }
}
