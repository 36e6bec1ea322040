use mockito::Server;
use organization_service::domain::clients::{DepartmentClient, EmployeeClient};
use organization_service::error::AppError;
use organization_service::infrastructure::remote::{HttpDepartmentClient, HttpEmployeeClient};
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

fn department_client(base: &str, timeout: Duration) -> HttpDepartmentClient {
    HttpDepartmentClient::new(Url::parse(base).unwrap(), timeout).unwrap()
}

fn employee_client(base: &str, timeout: Duration) -> HttpEmployeeClient {
    HttpEmployeeClient::new(Url::parse(base).unwrap(), timeout).unwrap()
}

#[tokio::test]
async fn test_departments_by_organization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/organization/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"organizationId":1,"name":"R&D"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = department_client(&server.url(), Duration::from_secs(2));
    let departments = client.find_by_organization(1).await.unwrap();

    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].as_json()["organizationId"], 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_departments_with_employees_under_base_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/department/organization/2/with-employees")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{ "id": 3, "name": "Ops", "employees": [{ "id": 7, "name": "Ann" }] }])
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let base = format!("{}/department", server.url());
    let client = department_client(&base, Duration::from_secs(2));
    let departments = client.find_by_organization_with_employees(2).await.unwrap();

    assert_eq!(departments[0].as_json()["employees"][0]["name"], "Ann");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_employees_by_organization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/organization/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":10,"name":"Jane"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = employee_client(&server.url(), Duration::from_secs(2));
    let employees = client.find_by_organization(1).await.unwrap();

    assert_eq!(employees[0].as_json(), &json!({ "id": 10, "name": "Jane" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_remote_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/organization/1")
        .with_status(503)
        .create_async()
        .await;

    let client = employee_client(&server.url(), Duration::from_secs(2));
    let err = client.find_by_organization(1).await.unwrap_err();

    match err {
        AppError::RemoteUnavailable { details, .. } => {
            assert_eq!(details["status"], 503);
            assert_eq!(details["service"], "employee");
        }
        other => panic!("expected RemoteUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_not_found_is_remote_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/organization/5")
        .with_status(404)
        .create_async()
        .await;

    let client = department_client(&server.url(), Duration::from_secs(2));
    let err = client.find_by_organization(5).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable { .. }));
}

#[tokio::test]
async fn test_invalid_body_is_remote_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/organization/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{ not json")
        .create_async()
        .await;

    let client = department_client(&server.url(), Duration::from_secs(2));
    let err = client.find_by_organization(1).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_remote_unavailable() {
    let client = employee_client("http://127.0.0.1:1", Duration::from_secs(2));
    let err = client.find_by_organization(1).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable { .. }));
}

#[tokio::test]
async fn test_slow_service_is_remote_timeout() {
    // Accepts connections but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let client = department_client(&format!("http://{addr}"), Duration::from_millis(200));
    let err = client.find_by_organization(1).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteTimeout { .. }));
}
