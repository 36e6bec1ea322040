//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each dependency.
///
/// `database` is checked with a round trip to storage and reads `ok` or
/// `error`. The sibling services are never called from here: their status is
/// always `configured` and `message` carries the base URL requests go to.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub department_service: CheckStatus,
    pub employee_service: CheckStatus,
}

/// Status of a single dependency, with an optional detail line.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
