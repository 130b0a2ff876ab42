/**
 * User Listing Handler
 *
 * GET /api/users
 *
 * Returns every user as `{id, email, role}`. The UI uses this to populate
 * assignee pickers. Requires authentication (enforced by the access gate);
 * any role may list users.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = users::list_users(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
