//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgOrganizationRepository`] - Organization storage and retrieval

pub mod pg_organization_repository;

pub use pg_organization_repository::PgOrganizationRepository;
