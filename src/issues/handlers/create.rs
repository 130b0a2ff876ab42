/**
 * Issue Creation Handler
 *
 * POST /api/issues
 *
 * The creator is always the acting user from the access gate; clients
 * cannot create issues on someone else's behalf.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::issues::db::{self, NewIssue};
use crate::issues::handlers::types::{IssuePayload, IssueResponse};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::validation::ValidatedJson;

pub async fn create_issue(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<IssuePayload>,
) -> Result<(StatusCode, Json<IssueResponse>), ApiError> {
    let status = payload.status();
    let priority = payload.priority();

    let issue = db::insert_issue(
        &state.pool,
        NewIssue {
            title: payload.title,
            description: payload.description,
            status,
            priority,
            created_by: user.id,
            assigned_to: payload.assigned_to,
        },
    )
    .await?;

    tracing::info!("Issue created: {} by {}", issue.id, user.email);

    let detail = db::fetch_issue_detail(&state.pool, issue.id)
        .await?
        .ok_or(ApiError::NotFound("Issue"))?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}
