//! issuetrack — an authenticated issue-tracking REST service.
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - configuration, shared state, application assembly
//! - **`routes`** - router construction and the API route table
//! - **`error`** - the `ApiError` taxonomy and its HTTP conversion
//! - **`validation`** - field-level request payload validation
//! - **`auth`** - user records, password hashing, session tokens, auth handlers
//! - **`middleware`** - the access gate run before every request
//! - **`issues`** - issue model, database operations, CRUD handlers
//! - **`comments`** - comment model, database operations, handlers
//!
//! # Request flow
//!
//! Every inbound request passes through the access gate, which resolves the
//! `session` cookie into a [`middleware::auth::CurrentUser`] (or rejects the
//! request). Handlers validate payloads, enforce owner-or-admin
//! authorization, perform a database operation, and serialize the result
//! as JSON.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Error types and HTTP conversion
pub mod error;

/// Request payload validation
pub mod validation;

/// Authentication, session tokens, user management
pub mod auth;

/// Request middleware (access gate)
pub mod middleware;

/// Issue CRUD
pub mod issues;

/// Comments on issues
pub mod comments;

pub use error::ApiError;
pub use server::config::AppConfig;
pub use server::init::create_app;
pub use server::state::AppState;
