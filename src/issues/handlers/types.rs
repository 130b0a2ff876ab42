/**
 * Issue Handler Types
 *
 * Payload, query-parameter, and response types for the issue endpoints.
 *
 * The create/update payload is a full replacement document: omitted
 * status/priority fall back to their defaults (open/medium), and an
 * omitted assignee clears the assignment.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::auth::handlers::types::UserRef;
use crate::error::ApiError;
use crate::issues::db::{IssueDetail, IssueFilter, IssuePriority, IssueStatus};
use crate::validation::{enum_member, FieldError};

fn validate_status(status: &str) -> Result<(), ValidationError> {
    enum_member(status, &["open", "closed"], "Status must be \"open\" or \"closed\"")
}

fn validate_priority(priority: &str) -> Result<(), ValidationError> {
    enum_member(
        priority,
        &["low", "medium", "high"],
        "Priority must be \"low\", \"medium\" or \"high\"",
    )
}

/// Create/update payload for an issue.
#[derive(Debug, Deserialize, Validate)]
pub struct IssuePayload {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = validate_status))]
    pub status: Option<String>,
    #[validate(custom(function = validate_priority))]
    pub priority: Option<String>,
    pub assigned_to: Option<Uuid>,
}

impl IssuePayload {
    /// Requested status, defaulting to open. Call after validation.
    pub fn status(&self) -> IssueStatus {
        self.status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(IssueStatus::Open)
    }

    /// Requested priority, defaulting to medium. Call after validation.
    pub fn priority(&self) -> IssuePriority {
        self.priority
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(IssuePriority::Medium)
    }
}

/// Raw query parameters for the issue listing. Everything arrives as
/// strings (the way the browser sends them) and is validated by
/// [`IssueQuery::parse`].
#[derive(Debug, Default, Deserialize)]
pub struct IssueQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

/// Validated listing parameters.
#[derive(Debug)]
pub struct ListParams {
    pub page: i64,
    pub page_size: i64,
    pub filter: IssueFilter,
}

impl IssueQuery {
    /// Validate and normalize the query. Reports every invalid parameter,
    /// not just the first.
    pub fn parse(self) -> Result<ListParams, ApiError> {
        let mut errors = Vec::new();

        let page = match self.page.as_deref().unwrap_or("1").parse::<i64>() {
            Ok(n) if n >= 1 => n,
            _ => {
                errors.push(FieldError::new("page", "page must be a positive integer"));
                1
            }
        };

        let page_size = match self.page_size.as_deref().unwrap_or("10").parse::<i64>() {
            Ok(n) if n >= 1 => n,
            _ => {
                errors.push(FieldError::new(
                    "page_size",
                    "page_size must be a positive integer",
                ));
                10
            }
        };

        let status = match self.status.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<IssueStatus>() {
                Ok(status) => Some(status),
                Err(()) => {
                    errors.push(FieldError::new("status", "Status must be \"open\" or \"closed\""));
                    None
                }
            },
        };

        let priority = match self.priority.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<IssuePriority>() {
                Ok(priority) => Some(priority),
                Err(()) => {
                    errors.push(FieldError::new(
                        "priority",
                        "Priority must be \"low\", \"medium\" or \"high\"",
                    ));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(ListParams {
            page,
            page_size,
            filter: IssueFilter {
                status,
                priority,
                search: self.search.filter(|s| !s.is_empty()),
            },
        })
    }
}

/// An issue as returned by the API, with author and assignee resolved to
/// nested objects.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: UserRef,
    pub assignee: Option<UserRef>,
}

impl From<IssueDetail> for IssueResponse {
    fn from(detail: IssueDetail) -> Self {
        let author = UserRef {
            id: detail.created_by,
            email: detail.author_email,
        };
        let assignee = match (detail.assigned_to, detail.assignee_email) {
            (Some(id), Some(email)) => Some(UserRef { id, email }),
            _ => None,
        };

        Self {
            id: detail.id,
            title: detail.title,
            description: detail.description,
            status: detail.status,
            priority: detail.priority,
            created_by: detail.created_by,
            assigned_to: detail.assigned_to,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
            author,
            assignee,
        }
    }
}

/// Pagination metadata for the listing response.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Response envelope for GET /api/issues.
#[derive(Debug, Serialize)]
pub struct IssueListResponse {
    pub issues: Vec<IssueResponse>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check;

    #[test]
    fn test_payload_defaults() {
        let payload = IssuePayload {
            title: "A bug".into(),
            description: "It breaks".into(),
            status: None,
            priority: None,
            assigned_to: None,
        };
        assert!(check(&payload).is_ok());
        assert_eq!(payload.status(), IssueStatus::Open);
        assert_eq!(payload.priority(), IssuePriority::Medium);
    }

    #[test]
    fn test_payload_rejects_bad_enum_values() {
        let payload = IssuePayload {
            title: "A bug".into(),
            description: "It breaks".into(),
            status: Some("reopened".into()),
            priority: Some("urgent".into()),
            assigned_to: None,
        };
        let err = check(&payload).unwrap_err();
        let details = err.details().unwrap();
        assert!(details.iter().any(|d| d.field == "status"));
        assert!(details.iter().any(|d| d.field == "priority"));
    }

    #[test]
    fn test_payload_title_length() {
        let payload = IssuePayload {
            title: "x".repeat(201),
            description: "d".into(),
            status: None,
            priority: None,
            assigned_to: None,
        };
        assert!(check(&payload).is_err());

        let payload = IssuePayload {
            title: "x".repeat(200),
            description: "d".into(),
            status: None,
            priority: None,
            assigned_to: None,
        };
        assert!(check(&payload).is_ok());
    }

    #[test]
    fn test_query_defaults() {
        let params = IssueQuery::default().parse().unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert!(params.filter.status.is_none());
        assert!(params.filter.search.is_none());
    }

    #[test]
    fn test_query_reports_every_bad_parameter() {
        let query = IssueQuery {
            page: Some("zero".into()),
            page_size: Some("-3".into()),
            status: Some("reopened".into()),
            priority: Some("urgent".into()),
            search: None,
        };
        let err = query.parse().unwrap_err();
        assert_eq!(err.details().unwrap().len(), 4);
    }

    #[test]
    fn test_query_parses_filters() {
        let query = IssueQuery {
            page: Some("2".into()),
            page_size: Some("5".into()),
            status: Some("closed".into()),
            priority: Some("high".into()),
            search: Some("login".into()),
        };
        let params = query.parse().unwrap();
        assert_eq!(params.page, 2);
        assert_eq!(params.page_size, 5);
        assert_eq!(params.filter.status, Some(IssueStatus::Closed));
        assert_eq!(params.filter.priority, Some(IssuePriority::High));
        assert_eq!(params.filter.search.as_deref(), Some("login"));
    }
}
