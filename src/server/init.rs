/**
 * Server Initialization
 *
 * Builds the running application from an `AppConfig`:
 *
 * 1. Open the database pool (creating the database file if missing)
 * 2. Run migrations
 * 3. Build the session codec from the configured secret
 * 4. Assemble the router with the access gate layered on top
 *
 * Unlike services where the database is an optional add-on, every endpoint
 * here reads or writes the store, so a missing database is a startup
 * error rather than a degraded mode.
 */

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::sessions::SessionCodec;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Open the connection pool and bring the schema up to date.
///
/// Foreign keys are enabled explicitly: SQLite defaults them off, and the
/// schema relies on them for the creator/assignee references.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created");

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Create the Axum application from configuration.
///
/// Returns a router ready to be served. The configuration is consumed and
/// frozen into `AppState`; nothing reads the environment after this point.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing issuetrack server");

    let pool = create_pool(&config.database_url).await?;
    let sessions = SessionCodec::new(&config.jwt_secret);

    let app_state = AppState {
        pool,
        sessions,
        config: Arc::new(config),
    };

    Ok(create_router(app_state))
}
