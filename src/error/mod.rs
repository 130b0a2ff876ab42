//! Error Module
//!
//! Defines the request-level error taxonomy (`ApiError`) and its
//! conversion into HTTP responses.
//!
//! # Taxonomy
//!
//! | Variant              | Status | Client-visible message        |
//! |----------------------|--------|-------------------------------|
//! | `Validation`         | 400    | "Invalid input" + details     |
//! | `Conflict`           | 400    | variant message               |
//! | `InvalidCredentials` | 401    | "Invalid credentials"         |
//! | `Unauthenticated`    | 401    | "Unauthorized"                |
//! | `Forbidden`          | 403    | "Forbidden"                   |
//! | `NotFound`           | 404    | "<entity> not found"          |
//! | `Database`/`Hash`/`Token` | 500 | "Internal server error"    |
//!
//! Internal causes are logged server-side and never leak to the client.

/// Error types
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::ApiError;
