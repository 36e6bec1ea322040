//! Lookup traits for the sibling services.
//!
//! The organization service does not own departments or employees; it asks
//! the department and employee services for them by organization id. These
//! traits are the seam, implemented over HTTP in
//! `crate::infrastructure::remote`.

pub mod department_client;
pub mod employee_client;

pub use department_client::DepartmentClient;
pub use employee_client::EmployeeClient;

#[cfg(test)]
pub use department_client::MockDepartmentClient;
#[cfg(test)]
pub use employee_client::MockEmployeeClient;
