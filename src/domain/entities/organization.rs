//! Organization entity, the aggregate this service owns.

use chrono::{DateTime, Utc};

use super::{Department, Employee};

/// An organization as stored locally, plus whatever related data has been
/// attached by enrichment.
///
/// Storage only ever fills the scalar fields; `departments` and `employees`
/// start empty and are set by the `with-*` lookups in
/// [`crate::application::services::OrganizationService`].
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
}

impl Organization {
    /// Creates an organization with no departments or employees attached.
    pub fn new(id: i64, name: String, address: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            address,
            created_at,
            departments: Vec::new(),
            employees: Vec::new(),
        }
    }

    /// Replaces the attached departments.
    pub fn attach_departments(&mut self, departments: Vec<Department>) {
        self.departments = departments;
    }

    /// Replaces the attached employees.
    pub fn attach_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }
}

/// Input data for creating a new organization.
///
/// Carries no id; storage assigns it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrganization {
    pub name: String,
    pub address: Option<String>,
}
