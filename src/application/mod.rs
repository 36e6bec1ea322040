//! Application layer services.
//!
//! Services sequence calls to the domain's repository and lookup traits and
//! expose a small API to the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::organization_service::OrganizationService`] - Organization storage and enrichment

pub mod services;
