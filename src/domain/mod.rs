//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clients`] - Remote lookup trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Composition lives in services (see [`crate::application::services`])

pub mod clients;
pub mod entities;
pub mod repositories;
