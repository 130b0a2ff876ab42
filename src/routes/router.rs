//! Router Configuration
//!
//! Combines the API route table, static file serving, and the fallback
//! handler into a single Axum router, then wraps everything in the
//! access gate middleware.
//!
//! # Route Order
//!
//! 1. API routes (auth, users, issues, comments)
//! 2. Static files under /static
//! 3. Fallback handler (404)
//!
//! The access gate runs before any route handler. Requests without a
//! valid session cookie get a 401 on `/api/*` paths and a redirect to
//! `/login` everywhere else, unless the path is public.

use axum::http::StatusCode;
use axum::{middleware, Router};
use tower_http::services::ServeDir;

use crate::middleware::auth::access_gate;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.nest_service("/static", ServeDir::new("public"));

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            access_gate,
        ))
        .with_state(app_state)
}
