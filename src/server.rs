//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, validator setup, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::validation::HttpProbeValidator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (bounded, with acquire timeout)
/// - Migrations (idempotent, run once before serving)
/// - Destination probe validator with the configured policy
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, probe-client
/// construction, or server bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let validator = HttpProbeValidator::new(
        config.validation_policy,
        Duration::from_secs(config.probe_timeout_secs),
    )?;
    tracing::info!(
        "Destination validation enabled ({} policy)",
        config.validation_policy
    );

    let state = AppState::new(Arc::new(pool), Arc::new(validator));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    log_endpoints();

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Logs the available endpoints at startup.
fn log_endpoints() {
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /api/health                 - Health check");
    tracing::info!("  GET    /api/urls                   - List URLs");
    tracing::info!("  POST   /api/urls                   - Register short URL");
    tracing::info!("  DELETE /api/urls/{{code}}          - Delete URL");
    tracing::info!("  GET    /api/urls/{{code}}/stats    - Access counter");
    tracing::info!("  GET    /api/urls/{{code}}/history  - Access history");
    tracing::info!("  GET    /api/creation-history       - Creation history");
    tracing::info!("  GET    /{{code}}                   - Redirect");
}
