//! Organization route table.

use crate::api::handlers::{
    create_organization_handler, organization_handler, organization_list_handler,
    organization_with_departments_and_employees_handler, organization_with_departments_handler,
    organization_with_employees_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Organization routes, mounted at the service root.
///
/// # Endpoints
///
/// - `POST /`                                    - Create an organization
/// - `GET  /`                                    - List organizations
/// - `GET  /{id}`                                - Get one organization
/// - `GET  /{id}/with-departments`               - ... with departments
/// - `GET  /{id}/with-departments-and-employees` - ... with departments and employees
/// - `GET  /{id}/with-employees`                 - ... with employees
pub fn organization_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(organization_list_handler).post(create_organization_handler),
        )
        .route("/{id}", get(organization_handler))
        .route(
            "/{id}/with-departments",
            get(organization_with_departments_handler),
        )
        .route(
            "/{id}/with-departments-and-employees",
            get(organization_with_departments_and_employees_handler),
        )
        .route(
            "/{id}/with-employees",
            get(organization_with_employees_handler),
        )
}
