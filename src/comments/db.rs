/**
 * Comment Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A comment row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment row joined with the author's email.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentDetail {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_email: String,
}

const DETAIL_SELECT: &str = r#"
SELECT c.id, c.issue_id, c.user_id, c.content, c.created_at,
       a.email AS author_email
FROM comments c
JOIN users a ON a.id = c.user_id
"#;

/// Insert a comment and return it with the author resolved.
pub async fn insert_comment(
    pool: &SqlitePool,
    issue_id: Uuid,
    user_id: Uuid,
    content: &str,
) -> Result<CommentDetail, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO comments (id, issue_id, user_id, content, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(issue_id)
    .bind(user_id)
    .bind(content)
    .bind(now)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, CommentDetail>(&format!("{DETAIL_SELECT} WHERE c.id = ?"))
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Comments on an issue, oldest first.
pub async fn list_comments(
    pool: &SqlitePool,
    issue_id: Uuid,
) -> Result<Vec<CommentDetail>, sqlx::Error> {
    sqlx::query_as::<_, CommentDetail>(&format!(
        "{DETAIL_SELECT} WHERE c.issue_id = ? ORDER BY c.created_at, c.id"
    ))
    .bind(issue_id)
    .fetch_all(pool)
    .await
}

/// Number of comments on an issue.
pub async fn count_comments(pool: &SqlitePool, issue_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE issue_id = ?")
        .bind(issue_id)
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::{create_user, hash_password, Role};
    use crate::issues::db::{insert_issue, IssuePriority, IssueStatus, NewIssue};
    use crate::server::test_db;

    async fn seed_issue(pool: &SqlitePool) -> (Uuid, Uuid) {
        let hash = hash_password("password123").unwrap();
        let user = create_user(pool, "author@example.com", &hash, Role::User)
            .await
            .unwrap();
        let issue = insert_issue(
            pool,
            NewIssue {
                title: "Bug".into(),
                description: "details".into(),
                status: IssueStatus::Open,
                priority: IssuePriority::Medium,
                created_by: user.id,
                assigned_to: None,
            },
        )
        .await
        .unwrap();
        (issue.id, user.id)
    }

    #[tokio::test]
    async fn test_insert_and_list_oldest_first() {
        let pool = test_db::pool().await;
        let (issue_id, user_id) = seed_issue(&pool).await;

        insert_comment(&pool, issue_id, user_id, "first").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        insert_comment(&pool, issue_id, user_id, "second").await.unwrap();

        let comments = list_comments(&pool, issue_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "first");
        assert_eq!(comments[1].content, "second");
        assert_eq!(comments[0].author_email, "author@example.com");
    }

    #[tokio::test]
    async fn test_list_empty_for_unknown_issue() {
        let pool = test_db::pool().await;
        seed_issue(&pool).await;

        let comments = list_comments(&pool, Uuid::new_v4()).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_count() {
        let pool = test_db::pool().await;
        let (issue_id, user_id) = seed_issue(&pool).await;

        assert_eq!(count_comments(&pool, issue_id).await.unwrap(), 0);
        insert_comment(&pool, issue_id, user_id, "hello").await.unwrap();
        assert_eq!(count_comments(&pool, issue_id).await.unwrap(), 1);
    }
}
