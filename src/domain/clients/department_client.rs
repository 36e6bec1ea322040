//! Lookup trait for the department service.

use crate::domain::entities::Department;
use crate::error::AppError;
use async_trait::async_trait;

/// Remote lookup of departments belonging to an organization.
///
/// # Implementations
///
/// - [`crate::infrastructure::remote::HttpDepartmentClient`] - REST client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentClient: Send + Sync {
    /// Departments of the organization, without their employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// when the department service cannot answer.
    async fn find_by_organization(&self, organization_id: i64)
    -> Result<Vec<Department>, AppError>;

    /// Departments of the organization, each with its employees nested inside.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// when the department service cannot answer.
    async fn find_by_organization_with_employees(
        &self,
        organization_id: i64,
    ) -> Result<Vec<Department>, AppError>;
}
