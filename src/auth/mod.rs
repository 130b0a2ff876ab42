//! Authentication Module
//!
//! User records, password hashing, session tokens, and the HTTP handlers
//! for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model, Role, database operations, bcrypt
//! ├── sessions.rs     - Session token codec and cookie builders
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /api/auth/signup
//!     ├── login.rs    - POST /api/auth/login
//!     ├── logout.rs   - POST /api/auth/logout
//!     └── users.rs    - GET /api/users
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Session tokens are signed, self-contained, and expire after 24 hours
//! - Login failures never reveal whether the email or the password was wrong

/// User model and database operations
pub mod users;

/// Session token codec and cookie builders
pub mod sessions;

/// HTTP handlers for auth endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use users::{Role, User};
