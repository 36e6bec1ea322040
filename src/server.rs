//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, sibling-service clients, and the Axum server
//! lifecycle.

use crate::application::services::OrganizationService;
use crate::config::Config;
use crate::infrastructure::persistence::PgOrganizationRepository;
use crate::infrastructure::remote::{HttpDepartmentClient, HttpEmployeeClient};
use crate::routes::{RateLimit, app_router};
use crate::state::{AppState, RemoteServices};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Department and employee service clients
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let remote_timeout = Duration::from_secs(config.remote_timeout_seconds);
    let department_client = Arc::new(HttpDepartmentClient::new(
        config.department_service_url.clone(),
        remote_timeout,
    )?);
    let employee_client = Arc::new(HttpEmployeeClient::new(
        config.employee_service_url.clone(),
        remote_timeout,
    )?);

    let repository = Arc::new(PgOrganizationRepository::new(Arc::new(pool)));
    let organization_service = Arc::new(OrganizationService::new(
        repository,
        department_client,
        employee_client,
    ));

    let state = AppState::new(
        organization_service,
        RemoteServices {
            department: config.department_service_url.clone(),
            employee: config.employee_service_url.clone(),
        },
    );

    let app = app_router(
        state,
        RateLimit {
            per_second: config.rate_limit_per_second,
            burst: config.rate_limit_burst,
        },
    )?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
