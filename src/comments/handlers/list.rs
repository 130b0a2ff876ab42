/**
 * Comment Listing Handler
 *
 * GET /api/issues/{id}/comments
 *
 * Returns a bare array, oldest comment first. An unknown issue id yields
 * an empty array rather than a 404; the issue detail endpoint is the
 * place to discover whether the issue exists.
 */

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::comments::db;
use crate::comments::handlers::types::CommentResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(issue_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = db::list_comments(&state.pool, issue_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}
