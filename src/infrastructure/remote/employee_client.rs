//! REST client for the employee service.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::http_client::RemoteServiceClient;
use crate::domain::clients::EmployeeClient;
use crate::domain::entities::Employee;
use crate::error::AppError;

/// Employee lookups via `GET /organization/{id}` on the employee service.
pub struct HttpEmployeeClient {
    client: RemoteServiceClient,
}

impl HttpEmployeeClient {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: RemoteServiceClient::new("employee", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn find_by_organization(&self, organization_id: i64) -> Result<Vec<Employee>, AppError> {
        self.client
            .get_json(&format!("organization/{organization_id}"))
            .await
    }
}
