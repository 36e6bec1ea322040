//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check (database, configured sibling services)
//! - `/`, `/{id}`, `/{id}/with-*` - Organization API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the organization API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Rate limit applied to the organization API.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limits for the organization API
///
/// # Errors
///
/// Returns an error if the rate limit configuration is invalid.
pub fn app_router(state: AppState, limit: RateLimit) -> anyhow::Result<NormalizePath<Router>> {
    let organization_router = api::routes::organization_routes()
        .layer(rate_limit::layer(limit.per_second, limit.burst)?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(organization_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
