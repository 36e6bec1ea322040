//! HTTP clients for the sibling services.
//!
//! - [`HttpDepartmentClient`] - Department service lookups
//! - [`HttpEmployeeClient`] - Employee service lookups
//!
//! Both share [`RemoteServiceClient`], which owns the pooled `reqwest` client,
//! the timeout, and the mapping of transport failures to [`crate::AppError`].

mod department_client;
mod employee_client;
mod http_client;

pub use department_client::HttpDepartmentClient;
pub use employee_client::HttpEmployeeClient;
pub use http_client::RemoteServiceClient;
