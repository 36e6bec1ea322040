//! PostgreSQL implementation of organization repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOrganization, Organization};
use crate::domain::repositories::OrganizationRepository;
use crate::error::AppError;

/// PostgreSQL repository for organizations.
///
/// Ids come from the `organizations.id` BIGSERIAL column. Queries are checked
/// at runtime so the crate builds without a live database.
pub struct PgOrganizationRepository {
    pool: Arc<PgPool>,
}

impl PgOrganizationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrganizationRow {
    id: i64,
    name: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<OrganizationRow> for Organization {
    fn from(row: OrganizationRow) -> Self {
        Organization::new(row.id, row.name, row.address, row.created_at)
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    async fn create(&self, new_organization: NewOrganization) -> Result<Organization, AppError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            INSERT INTO organizations (name, address)
            VALUES ($1, $2)
            RETURNING id, name, address, created_at
            "#,
        )
        .bind(&new_organization.name)
        .bind(&new_organization.address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Organization>, AppError> {
        let rows = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, name, address, created_at
            FROM organizations
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Organization::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Organization, AppError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, name, address, created_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Organization::from)
            .ok_or_else(|| AppError::not_found("Organization not found", json!({ "id": id })))
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
