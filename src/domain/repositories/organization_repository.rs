//! Repository trait for organization storage.

use crate::domain::entities::{NewOrganization, Organization};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage collaborator for organizations.
///
/// Supports create and read only; organizations are never updated or deleted
/// through this service. Returned organizations never carry departments or
/// employees.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrganizationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_organization.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Persists a new organization and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError>;

    /// Lists every organization in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Organization>, AppError>;

    /// Fetches an organization by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no organization has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_by_id(&self, id: i64) -> Result<Organization, AppError>;

    /// Checks that the storage backend answers.
    async fn health_check(&self) -> bool;
}
