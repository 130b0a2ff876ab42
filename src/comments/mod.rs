//! Comments Module
//!
//! Comments hang off issues, are written by any authenticated user, and
//! are immutable once created — there is no update or delete endpoint.
//!
//! # Module Structure
//!
//! ```text
//! comments/
//! ├── mod.rs          - Module exports
//! ├── db.rs           - Comment model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Payload and response types
//!     ├── list.rs     - GET /api/issues/{id}/comments
//!     └── create.rs   - POST /api/issues/{id}/comments
//! ```

/// Comment model and database operations
pub mod db;

/// HTTP handlers for comment endpoints
pub mod handlers;

pub use db::Comment;
