#![allow(dead_code)]

use organization_service::application::services::OrganizationService;
use organization_service::infrastructure::persistence::PgOrganizationRepository;
use organization_service::infrastructure::remote::{HttpDepartmentClient, HttpEmployeeClient};
use organization_service::state::{AppState, RemoteServices};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub async fn create_test_organization(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO organizations (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Builds state backed by `pool`, with sibling services at the given URLs.
pub fn create_test_state(pool: PgPool, department_url: &str, employee_url: &str) -> AppState {
    let department_url = Url::parse(department_url).unwrap();
    let employee_url = Url::parse(employee_url).unwrap();
    let timeout = Duration::from_secs(2);

    let repository = Arc::new(PgOrganizationRepository::new(Arc::new(pool)));
    let department_client =
        Arc::new(HttpDepartmentClient::new(department_url.clone(), timeout).unwrap());
    let employee_client = Arc::new(HttpEmployeeClient::new(employee_url.clone(), timeout).unwrap());

    let organization_service = Arc::new(OrganizationService::new(
        repository,
        department_client,
        employee_client,
    ));

    AppState::new(
        organization_service,
        RemoteServices {
            department: department_url,
            employee: employee_url,
        },
    )
}
