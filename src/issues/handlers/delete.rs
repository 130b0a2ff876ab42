/**
 * Issue Deletion Handler
 *
 * DELETE /api/issues/{id}
 *
 * Same resolve-then-authorize ladder as update. Deleting an issue also
 * removes its comments (ON DELETE CASCADE).
 */

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::auth::users::Role;
use crate::error::ApiError;
use crate::issues::db;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn delete_issue(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let existing = db::fetch_issue(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    if user.role != Role::Admin && existing.created_by != user.id {
        tracing::warn!("Forbidden issue delete: {} by {}", id, user.email);
        return Err(ApiError::Forbidden);
    }

    db::delete_issue(&state.pool, id).await?;
    tracing::info!("Issue deleted: {} by {}", id, user.email);

    Ok(Json(serde_json::json!({
        "message": "Issue deleted successfully"
    })))
}
