/**
 * Comment Payload and Response Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::handlers::types::UserRef;
use crate::comments::db::CommentDetail;

/// Body for POST /api/issues/{id}/comments.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentPayload {
    #[validate(length(min = 1, message = "Comment content is required"))]
    pub content: String,
}

/// A comment as returned to clients.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: UserRef,
}

impl From<CommentDetail> for CommentResponse {
    fn from(detail: CommentDetail) -> Self {
        CommentResponse {
            id: detail.id,
            issue_id: detail.issue_id,
            user_id: detail.user_id,
            content: detail.content,
            created_at: detail.created_at,
            author: UserRef {
                id: detail.user_id,
                email: detail.author_email,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_rejected() {
        let payload = CommentPayload {
            content: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_nonempty_content_accepted() {
        let payload = CommentPayload {
            content: "Looks good to me".into(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_response_carries_author() {
        let detail = CommentDetail {
            id: Uuid::new_v4(),
            issue_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            content: "hello".into(),
            created_at: Utc::now(),
            author_email: "author@example.com".into(),
        };
        let response = CommentResponse::from(detail.clone());
        assert_eq!(response.author.id, detail.user_id);
        assert_eq!(response.author.email, "author@example.com");
    }
}
