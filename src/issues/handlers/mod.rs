//! HTTP handlers for issue endpoints.

/// Payload, query, and response types
pub mod types;

/// GET /api/issues
pub mod list;

/// POST /api/issues
pub mod create;

/// GET /api/issues/{id}
pub mod get;

/// PUT /api/issues/{id}
pub mod update;

/// DELETE /api/issues/{id}
pub mod delete;

pub use create::create_issue;
pub use delete::delete_issue;
pub use get::get_issue;
pub use list::list_issues;
pub use update::update_issue;
