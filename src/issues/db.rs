/**
 * Issue Model and Database Operations
 *
 * Issues reference their creator (immutable) and an optional assignee.
 * Listing supports status/priority filters, case-insensitive substring
 * search over title and description, and offset pagination; the count
 * query applies the same filters so pagination totals always match the
 * result set.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

/// Issue status. Stored as lowercase text; new issues default to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Closed,
}

impl FromStr for IssueStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueStatus::Open),
            "closed" => Ok(IssueStatus::Closed),
            _ => Err(()),
        }
    }
}

/// Issue priority. Stored as lowercase text; new issues default to medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
}

impl FromStr for IssuePriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(IssuePriority::Low),
            "medium" => Ok(IssuePriority::Medium),
            "high" => Ok(IssuePriority::High),
            _ => Err(()),
        }
    }
}

/// An issue row, without the joined author/assignee emails.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An issue row joined with author and assignee emails, the shape the
/// API returns.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IssueDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_email: String,
    pub assignee_email: Option<String>,
}

/// Fields for a new issue.
#[derive(Debug)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
}

/// Replacement fields for an update. The creator is immutable and is
/// deliberately absent.
#[derive(Debug)]
pub struct IssueChanges {
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub assigned_to: Option<Uuid>,
}

/// Listing filters. All optional; combined with AND.
#[derive(Debug, Default, Clone)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
    pub search: Option<String>,
}

const DETAIL_SELECT: &str = r#"
SELECT i.id, i.title, i.description, i.status, i.priority,
       i.created_by, i.assigned_to, i.created_at, i.updated_at,
       a.email AS author_email, s.email AS assignee_email
FROM issues i
JOIN users a ON a.id = i.created_by
LEFT JOIN users s ON s.id = i.assigned_to
"#;

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filter: &IssueFilter) {
    if let Some(status) = filter.status {
        builder.push(" AND i.status = ").push_bind(status);
    }
    if let Some(priority) = filter.priority {
        builder.push(" AND i.priority = ").push_bind(priority);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search.to_lowercase());
        builder
            .push(" AND (LOWER(i.title) LIKE ")
            .push_bind(pattern.clone())
            .push(" OR LOWER(i.description) LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// Insert a new issue.
pub async fn insert_issue(pool: &SqlitePool, new: NewIssue) -> Result<Issue, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Issue>(
        r#"
        INSERT INTO issues (id, title, description, status, priority,
                            created_by, assigned_to, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, status, priority,
                  created_by, assigned_to, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.status)
    .bind(new.priority)
    .bind(new.created_by)
    .bind(new.assigned_to)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Fetch an issue row without joins (enough for existence and
/// authorization checks).
pub async fn fetch_issue(pool: &SqlitePool, id: Uuid) -> Result<Option<Issue>, sqlx::Error> {
    sqlx::query_as::<_, Issue>(
        r#"
        SELECT id, title, description, status, priority,
               created_by, assigned_to, created_at, updated_at
        FROM issues
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetch an issue with author/assignee emails resolved.
pub async fn fetch_issue_detail(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<IssueDetail>, sqlx::Error> {
    let mut builder = QueryBuilder::new(DETAIL_SELECT);
    builder.push("WHERE i.id = ").push_bind(id);

    builder
        .build_query_as::<IssueDetail>()
        .fetch_optional(pool)
        .await
}

/// Replace an issue's mutable fields and bump `updated_at`.
pub async fn update_issue(
    pool: &SqlitePool,
    id: Uuid,
    changes: IssueChanges,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE issues
        SET title = ?, description = ?, status = ?, priority = ?,
            assigned_to = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.description)
    .bind(changes.status)
    .bind(changes.priority)
    .bind(changes.assigned_to)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete an issue. Returns the number of rows removed.
pub async fn delete_issue(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM issues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// One page of issues matching the filter, newest-created first (id as a
/// stable tie-break).
pub async fn list_issues(
    pool: &SqlitePool,
    filter: &IssueFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<IssueDetail>, sqlx::Error> {
    let mut builder = QueryBuilder::new(DETAIL_SELECT);
    builder.push("WHERE 1 = 1");
    push_filters(&mut builder, filter);
    builder.push(" ORDER BY i.created_at DESC, i.id");
    builder.push(" LIMIT ").push_bind(limit);
    builder.push(" OFFSET ").push_bind(offset);

    builder
        .build_query_as::<IssueDetail>()
        .fetch_all(pool)
        .await
}

/// Count of issues matching the filter — the same predicate as
/// [`list_issues`], so pagination totals are consistent with the page
/// contents.
pub async fn count_issues(pool: &SqlitePool, filter: &IssueFilter) -> Result<i64, sqlx::Error> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM issues i WHERE 1 = 1");
    push_filters(&mut builder, filter);

    builder.build_query_scalar::<i64>().fetch_one(pool).await
}
