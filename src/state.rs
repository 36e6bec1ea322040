//! Shared application state injected into every handler.

use std::sync::Arc;
use url::Url;

use crate::application::services::OrganizationService;

/// State cloned into each request.
///
/// Holds no mutable data; everything lives behind `Arc` and is shared by
/// concurrent requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub organization_service: Arc<OrganizationService>,
    pub remotes: Arc<RemoteServices>,
}

/// Base URLs of the sibling services, reported by the health endpoint.
#[derive(Debug, Clone)]
pub struct RemoteServices {
    pub department: Url,
    pub employee: Url,
}

impl AppState {
    pub fn new(organization_service: Arc<OrganizationService>, remotes: RemoteServices) -> Self {
        Self {
            organization_service,
            remotes: Arc::new(remotes),
        }
    }
}
