use organization_service::domain::entities::NewOrganization;
use organization_service::domain::repositories::OrganizationRepository;
use organization_service::error::AppError;
use organization_service::infrastructure::persistence::PgOrganizationRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn repository(pool: PgPool) -> PgOrganizationRepository {
    PgOrganizationRepository::new(Arc::new(pool))
}

fn new_organization(name: &str, address: Option<&str>) -> NewOrganization {
    NewOrganization {
        name: name.to_string(),
        address: address.map(str::to_string),
    }
}

#[sqlx::test]
async fn test_create_assigns_sequential_ids(pool: PgPool) {
    let repo = repository(pool);

    let first = repo.create(new_organization("Acme", None)).await.unwrap();
    let second = repo
        .create(new_organization("Globex", Some("Springfield")))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.address.as_deref(), Some("Springfield"));
    assert!(first.departments.is_empty());
    assert!(first.employees.is_empty());
}

#[sqlx::test]
async fn test_get_by_id_round_trip(pool: PgPool) {
    let repo = repository(pool);

    let created = repo
        .create(new_organization("Initech", Some("Austin")))
        .await
        .unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[sqlx::test]
async fn test_get_by_id_not_found(pool: PgPool) {
    let repo = repository(pool);

    let result = repo.get_by_id(999).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_list_orders_by_id(pool: PgPool) {
    let repo = repository(pool);

    for name in ["Acme", "Globex", "Initech"] {
        repo.create(new_organization(name, None)).await.unwrap();
    }

    let all = repo.list().await.unwrap();

    assert_eq!(
        all.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(),
        vec!["Acme", "Globex", "Initech"]
    );
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = repository(pool.clone());
    assert!(repo.health_check().await);

    pool.close().await;
    assert!(!repo.health_check().await);
}
