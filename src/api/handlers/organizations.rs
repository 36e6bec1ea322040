//! Handlers for organization endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::organization::{CreateOrganizationRequest, OrganizationItem};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an organization.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "name": "Acme", "address": "Main Street 1" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not a valid organization.
pub async fn create_organization_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrganizationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrganizationItem>), AppError> {
    let Json(payload) = payload?;

    let organization = state.organization_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(organization.into())))
}

/// Lists all organizations.
///
/// # Endpoint
///
/// `GET /`
pub async fn organization_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganizationItem>>, AppError> {
    let organizations = state.organization_service.list_all().await?;

    Ok(Json(
        organizations.into_iter().map(OrganizationItem::from).collect(),
    ))
}

/// Returns one organization.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the organization does not exist.
pub async fn organization_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrganizationItem>, AppError> {
    let Path(id) = id?;
    let organization = state.organization_service.get_by_id(id).await?;
    Ok(Json(organization.into()))
}

/// Returns an organization with its departments.
///
/// # Endpoint
///
/// `GET /{id}/with-departments`
///
/// # Errors
///
/// Returns 404 if the organization does not exist.
/// Returns 502 / 504 if the department service fails or times out.
pub async fn organization_with_departments_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrganizationItem>, AppError> {
    let Path(id) = id?;
    let organization = state
        .organization_service
        .get_by_id_with_departments(id)
        .await?;
    Ok(Json(organization.into()))
}

/// Returns an organization with its departments (including their employees)
/// and its employees.
///
/// # Endpoint
///
/// `GET /{id}/with-departments-and-employees`
///
/// # Errors
///
/// Returns 404 if the organization does not exist.
/// Returns 502 / 504 if either sibling service fails or times out.
pub async fn organization_with_departments_and_employees_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrganizationItem>, AppError> {
    let Path(id) = id?;
    let organization = state
        .organization_service
        .get_by_id_with_departments_and_employees(id)
        .await?;
    Ok(Json(organization.into()))
}

/// Returns an organization with its employees.
///
/// # Endpoint
///
/// `GET /{id}/with-employees`
///
/// # Errors
///
/// Returns 404 if the organization does not exist.
/// Returns 502 / 504 if the employee service fails or times out.
pub async fn organization_with_employees_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrganizationItem>, AppError> {
    let Path(id) = id?;
    let organization = state
        .organization_service
        .get_by_id_with_employees(id)
        .await?;
    Ok(Json(organization.into()))
}
