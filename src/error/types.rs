/**
 * API Error Types
 *
 * All handler failures are expressed as `ApiError`. Validation and
 * authorization failures are raised at the handler boundary; unexpected
 * data-layer failures are wrapped via `From` impls and flattened to a
 * generic 500 when rendered.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::validation::FieldError;

/// Request-level errors, convertible to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed field-level validation. Carries every violated
    /// field with a human-readable message.
    #[error("Invalid input")]
    Validation(Vec<FieldError>),

    /// Login failed. Deliberately covers both "email not found" and
    /// "wrong password" so the response never reveals which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No usable session on a protected route.
    #[error("Unauthorized")]
    Unauthenticated,

    /// Authenticated, but not the owner and not an admin.
    #[error("Forbidden")]
    Forbidden,

    /// Target entity does not exist. The payload is the entity name,
    /// e.g. `NotFound("Issue")` renders as "Issue not found".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// State conflict, e.g. signup with an already-registered email.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session token could not be produced.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate email maps to 400 to match the public API contract.
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-visible message. Internal causes are collapsed to a generic
    /// message; the detail goes to the log, not the response.
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Field-level details, present only for validation failures.
    pub fn details(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
