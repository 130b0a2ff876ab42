//! Request middleware.
//!
//! Currently a single piece: the access gate that authenticates every
//! request before it reaches a handler.

/// The access gate and the `AuthUser` extractor
pub mod auth;

pub use auth::{access_gate, AuthUser, CurrentUser};
