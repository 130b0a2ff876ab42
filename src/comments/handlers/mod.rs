//! HTTP handlers for comment endpoints.

/// Payload and response types
pub mod types;

/// GET /api/issues/{id}/comments
pub mod list;

/// POST /api/issues/{id}/comments
pub mod create;

pub use create::create_comment;
pub use list::list_comments;
