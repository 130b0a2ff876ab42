/**
 * Server Configuration
 *
 * Configuration is read from the environment exactly once at startup and
 * carried in an immutable `AppConfig`. Handlers never read environment
 * variables directly; anything they need is injected through `AppState`.
 *
 * # Required variables
 *
 * - `JWT_SECRET` - signing secret for session tokens. There is no
 *   fallback: starting without it is a configuration error.
 *
 * # Optional variables
 *
 * - `DATABASE_URL` - defaults to a local SQLite file
 * - `SERVER_PORT` - defaults to 3000
 * - `APP_ENV` - `production` enables the Secure cookie attribute
 */

use thiserror::Error;

/// Default database when `DATABASE_URL` is not set. A local file path,
/// not a credential.
const DEFAULT_DATABASE_URL: &str = "sqlite:issuetrack.db";

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET` is missing from the environment.
    #[error("JWT_SECRET must be set; refusing to start without a signing secret")]
    MissingJwtSecret,

    /// `SERVER_PORT` is present but not a valid port number.
    #[error("SERVER_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
    /// Signing secret for session tokens
    pub jwt_secret: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Whether session cookies carry the Secure attribute
    pub secure_cookies: bool,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails if `JWT_SECRET` is absent. The original deployment this
    /// service replaces shipped a literal fallback secret; that is exactly
    /// the kind of default this refuses to provide.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let secure_cookies = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            secure_cookies,
        })
    }
}
