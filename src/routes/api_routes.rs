/**
 * API Route Table
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - Register and start a session
 * - `POST /api/auth/login` - Log in and start a session
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Users
 * - `GET /api/users` - List users (for assignee pickers)
 *
 * ## Issues
 * - `GET /api/issues` - Filtered, paginated issue list
 * - `POST /api/issues` - Create an issue
 * - `GET /api/issues/{id}` - Issue detail
 * - `PUT /api/issues/{id}` - Update an issue (owner or admin)
 * - `DELETE /api/issues/{id}` - Delete an issue (owner or admin)
 *
 * ## Comments
 * - `GET /api/issues/{id}/comments` - Comments on an issue, oldest first
 * - `POST /api/issues/{id}/comments` - Add a comment
 *
 * Signup and login are public; every other route requires a valid
 * session cookie, enforced by the access gate.
 */

use axum::Router;

use crate::auth::handlers::{list_users, login, logout, signup};
use crate::comments::handlers::{create_comment, list_comments};
use crate::issues::handlers::{create_issue, delete_issue, get_issue, list_issues, update_issue};
use crate::server::state::AppState;

/// Add all API routes to the router.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        // User directory
        .route("/api/users", axum::routing::get(list_users))
        // Issue endpoints
        .route(
            "/api/issues",
            axum::routing::get(list_issues).post(create_issue),
        )
        .route(
            "/api/issues/{id}",
            axum::routing::get(get_issue)
                .put(update_issue)
                .delete(delete_issue),
        )
        // Comment endpoints
        .route(
            "/api/issues/{id}/comments",
            axum::routing::get(list_comments).post(create_comment),
        )
}
