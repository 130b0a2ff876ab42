/**
 * Single Issue Handler
 *
 * GET /api/issues/{id}
 */

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::issues::db;
use crate::issues::handlers::types::IssueResponse;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn get_issue(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<IssueResponse>, ApiError> {
    let detail = db::fetch_issue_detail(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    Ok(Json(detail.into()))
}
