/**
 * Issue Listing Handler
 *
 * GET /api/issues
 *
 * Supports `status` and `priority` filters, case-insensitive substring
 * `search` over title and description, and `page`/`page_size` pagination.
 * Results are newest-created first. The pagination `total` is the count
 * of rows matching the filter, so it is independent of the page size.
 */

use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::issues::db;
use crate::issues::handlers::types::{IssueListResponse, IssueQuery, IssueResponse, Pagination};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

pub async fn list_issues(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<IssueQuery>,
) -> Result<Json<IssueListResponse>, ApiError> {
    let params = query.parse()?;
    let offset = (params.page - 1) * params.page_size;

    let total = db::count_issues(&state.pool, &params.filter).await?;
    let rows = db::list_issues(&state.pool, &params.filter, params.page_size, offset).await?;

    let total_pages = (total + params.page_size - 1) / params.page_size;

    Ok(Json(IssueListResponse {
        issues: rows.into_iter().map(IssueResponse::from).collect(),
        pagination: Pagination {
            page: params.page,
            page_size: params.page_size,
            total,
            total_pages,
        },
    }))
}
