//! HTTP handlers for authentication and user endpoints.

/// Request/response types
pub mod types;

/// POST /api/auth/signup
pub mod signup;

/// POST /api/auth/login
pub mod login;

/// POST /api/auth/logout
pub mod logout;

/// GET /api/users
pub mod users;

pub use login::login;
pub use logout::logout;
pub use signup::signup;
pub use users::list_users;
