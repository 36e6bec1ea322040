//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`OrganizationRepository`] - Organization create/read operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod organization_repository;

pub use organization_repository::OrganizationRepository;

#[cfg(test)]
pub use organization_repository::MockOrganizationRepository;
