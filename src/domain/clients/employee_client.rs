//! Lookup trait for the employee service.

use crate::domain::entities::Employee;
use crate::error::AppError;
use async_trait::async_trait;

/// Remote lookup of employees belonging directly to an organization.
///
/// # Implementations
///
/// - [`crate::infrastructure::remote::HttpEmployeeClient`] - REST client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeClient: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// when the employee service cannot answer.
    async fn find_by_organization(&self, organization_id: i64) -> Result<Vec<Employee>, AppError>;
}
