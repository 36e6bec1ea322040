//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`remote`] - HTTP clients for the department and employee services

pub mod persistence;
pub mod remote;
