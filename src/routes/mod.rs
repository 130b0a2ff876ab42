//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint table
//! ```
//!
//! # Route Organization
//!
//! Routes are assembled in a specific order:
//!
//! 1. **API Routes** - auth, users, issues, comments
//! 2. **Static Files** - assets served from the public directory
//! 3. **Fallback Handler** - 404 for unknown routes
//!
//! The access gate middleware wraps the whole router, so every route
//! except the public paths requires a valid session cookie.

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::create_router;
