//! Core domain entities.
//!
//! - [`Organization`] - The aggregate stored by this service
//! - [`NewOrganization`] - Input for creating an organization
//! - [`Department`] - Opaque record from the department service
//! - [`Employee`] - Opaque record from the employee service
//!
//! Entities are plain data; serialization for the HTTP API lives in
//! [`crate::api::dto`]. `Department` and `Employee` are the exception: they are
//! foreign JSON and are forwarded as-is.

pub mod department;
pub mod employee;
pub mod organization;

pub use department::Department;
pub use employee::Employee;
pub use organization::{NewOrganization, Organization};
