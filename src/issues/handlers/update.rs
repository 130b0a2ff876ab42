/**
 * Issue Update Handler
 *
 * PUT /api/issues/{id}
 *
 * Step order matters and matches the other mutating endpoints:
 *
 * 1. Resolve the issue — `404` if absent
 * 2. Authorize — creator or admin, else `403`
 * 3. Decode and validate the payload — `400` with field details
 * 4. Apply the update and return the materialized issue
 *
 * The body stays an opaque `Value` until after the authorization check,
 * so a caller who may not touch the issue learns nothing about payload
 * handling, and an absent issue is a 404 even when the body is garbage.
 */

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::auth::users::Role;
use crate::error::ApiError;
use crate::issues::db::{self, IssueChanges};
use crate::issues::handlers::types::{IssuePayload, IssueResponse};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::validation;

pub async fn update_issue(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<IssueResponse>, ApiError> {
    let existing = db::fetch_issue(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    if user.role != Role::Admin && existing.created_by != user.id {
        tracing::warn!("Forbidden issue update: {} by {}", id, user.email);
        return Err(ApiError::Forbidden);
    }

    let payload: IssuePayload = validation::decode(body)?;
    validation::check(&payload)?;

    let status = payload.status();
    let priority = payload.priority();

    db::update_issue(
        &state.pool,
        id,
        IssueChanges {
            title: payload.title,
            description: payload.description,
            status,
            priority,
            assigned_to: payload.assigned_to,
        },
    )
    .await?;

    tracing::info!("Issue updated: {} by {}", id, user.email);

    let detail = db::fetch_issue_detail(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    Ok(Json(detail.into()))
}
