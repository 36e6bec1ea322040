//! Services for the application layer.

pub mod organization_service;

pub use organization_service::OrganizationService;
