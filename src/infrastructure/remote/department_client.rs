//! REST client for the department service.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::http_client::RemoteServiceClient;
use crate::domain::clients::DepartmentClient;
use crate::domain::entities::Department;
use crate::error::AppError;

/// Department lookups over the department service's REST API.
///
/// # Endpoints
///
/// - `GET /organization/{id}` - departments of an organization
/// - `GET /organization/{id}/with-employees` - same, with nested employees
pub struct HttpDepartmentClient {
    client: RemoteServiceClient,
}

impl HttpDepartmentClient {
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            client: RemoteServiceClient::new("department", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl DepartmentClient for HttpDepartmentClient {
    async fn find_by_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<Department>, AppError> {
        self.client
            .get_json(&format!("organization/{organization_id}"))
            .await
    }

    async fn find_by_organization_with_employees(
        &self,
        organization_id: i64,
    ) -> Result<Vec<Department>, AppError> {
        self.client
            .get_json(&format!("organization/{organization_id}/with-employees"))
            .await
    }
}
