/**
 * Application State Management
 *
 * `AppState` is the central state container, cloned into every handler.
 * It holds the database pool, the session codec (built from the configured
 * signing secret), and the immutable configuration.
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionCodec;
use crate::server::config::AppConfig;

/// Shared application state.
///
/// All fields are cheaply cloneable: the pool is an `Arc` internally, the
/// codec holds only derived keys, and the config is wrapped in `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Session token codec, built once from `AppConfig::jwt_secret`
    pub sessions: SessionCodec,
    /// Immutable process configuration
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for SessionCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
