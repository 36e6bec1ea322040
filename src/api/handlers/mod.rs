//! HTTP request handlers for API endpoints.

pub mod health;
pub mod organizations;

pub use health::health_handler;
pub use organizations::{
    create_organization_handler, organization_handler, organization_list_handler,
    organization_with_departments_and_employees_handler, organization_with_departments_handler,
    organization_with_employees_handler,
};
