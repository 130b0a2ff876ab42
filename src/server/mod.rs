//! Server Module
//!
//! Handles everything that happens before the first request: loading
//! configuration from the environment, building the shared application
//! state, connecting to the database, and assembling the router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs       - Module exports
//! ├── config.rs    - AppConfig loaded from environment variables
//! ├── state.rs     - AppState and FromRef implementations
//! └── init.rs      - Pool creation, migrations, app assembly
//! ```

/// Environment-driven configuration
pub mod config;

/// Application state shared across handlers
pub mod state;

/// Pool creation and application assembly
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
