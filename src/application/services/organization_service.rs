//! Organization service: storage access plus enrichment from sibling services.

use crate::domain::clients::{DepartmentClient, EmployeeClient};
use crate::domain::entities::{NewOrganization, Organization};
use crate::domain::repositories::OrganizationRepository;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Service behind the organization endpoints.
///
/// Reads and writes go straight to the repository. The `*_with_*` lookups first
/// resolve the organization locally and only then call the remote services, so
/// an unknown id never reaches them. Remote calls run one after another and any
/// failure fails the whole lookup; nothing is retried and no partially
/// enriched organization is ever returned.
pub struct OrganizationService {
    repository: Arc<dyn OrganizationRepository>,
    department_client: Arc<dyn DepartmentClient>,
    employee_client: Arc<dyn EmployeeClient>,
}

impl OrganizationService {
    /// Creates a new organization service.
    pub fn new(
        repository: Arc<dyn OrganizationRepository>,
        department_client: Arc<dyn DepartmentClient>,
        employee_client: Arc<dyn EmployeeClient>,
    ) -> Self {
        Self {
            repository,
            department_client,
            employee_client,
        }
    }

    /// Stores a new organization and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError> {
        info!(organization = ?new_organization, "Organization add");
        self.repository.create(new_organization).await
    }

    /// Lists all organizations without enrichment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<Organization>, AppError> {
        info!("Organization find");
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Organization, AppError> {
        info!(id, "Organization find");
        self.repository.get_by_id(id).await
    }

    /// Fetches an organization with its departments (no nested employees).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// if the department service fails.
    pub async fn get_by_id_with_departments(&self, id: i64) -> Result<Organization, AppError> {
        info!(id, "Organization find");
        let mut organization = self.repository.get_by_id(id).await?;

        let departments = self
            .department_client
            .find_by_organization(organization.id)
            .await?;
        organization.attach_departments(departments);

        Ok(organization)
    }

    /// Fetches an organization with its departments (each carrying its
    /// employees) and its direct employees.
    ///
    /// The department lookup runs first, then the employee lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// if either remote service fails.
    pub async fn get_by_id_with_departments_and_employees(
        &self,
        id: i64,
    ) -> Result<Organization, AppError> {
        info!(id, "Organization find");
        let mut organization = self.repository.get_by_id(id).await?;

        let departments = self
            .department_client
            .find_by_organization_with_employees(organization.id)
            .await?;
        let employees = self
            .employee_client
            .find_by_organization(organization.id)
            .await?;

        organization.attach_departments(departments);
        organization.attach_employees(employees);

        Ok(organization)
    }

    /// Fetches an organization with its direct employees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organization does not exist.
    /// Returns [`AppError::RemoteUnavailable`] or [`AppError::RemoteTimeout`]
    /// if the employee service fails.
    pub async fn get_by_id_with_employees(&self, id: i64) -> Result<Organization, AppError> {
        info!(id, "Organization find");
        let mut organization = self.repository.get_by_id(id).await?;

        let employees = self
            .employee_client
            .find_by_organization(organization.id)
            .await?;
        organization.attach_employees(employees);

        Ok(organization)
    }

    /// Reports whether storage is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
