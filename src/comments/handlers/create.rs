/**
 * Comment Creation Handler
 *
 * POST /api/issues/{id}/comments
 *
 * The issue must exist before the body is decoded, so a comment on a
 * missing issue is a 404 even when the body is also malformed.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::comments::db;
use crate::comments::handlers::types::{CommentPayload, CommentResponse};
use crate::error::ApiError;
use crate::issues;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::validation;

pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(issue_id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    issues::db::fetch_issue(&state.pool, issue_id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    let payload: CommentPayload = validation::decode(body)?;
    validation::check(&payload)?;

    let comment = db::insert_comment(&state.pool, issue_id, user.id, &payload.content).await?;

    tracing::info!("Comment {} added to issue {} by {}", comment.id, issue_id, user.email);

    Ok((StatusCode::CREATED, Json(comment.into())))
}
