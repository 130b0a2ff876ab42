//! Issues Module
//!
//! The issue entity: model and enums, database operations (including the
//! filtered, paginated listing), and the CRUD handlers.
//!
//! # Module Structure
//!
//! ```text
//! issues/
//! ├── mod.rs          - Module exports
//! ├── db.rs           - Issue model, filters, database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Payload, query, and response types
//!     ├── list.rs     - GET /api/issues
//!     ├── create.rs   - POST /api/issues
//!     ├── get.rs      - GET /api/issues/{id}
//!     ├── update.rs   - PUT /api/issues/{id}
//!     └── delete.rs   - DELETE /api/issues/{id}
//! ```
//!
//! # Authorization
//!
//! Reads require any authenticated user. Update and delete require the
//! acting user to be the issue's creator or an admin.

/// Issue model and database operations
pub mod db;

/// HTTP handlers for issue endpoints
pub mod handlers;

pub use db::{Issue, IssuePriority, IssueStatus};
