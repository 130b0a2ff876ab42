/**
 * Auth Handler Types
 *
 * Request and response types shared by the auth handlers. Request types
 * carry their field constraints (mirroring what the browser UI enforces);
 * response types never include the password hash.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::auth::users::{Role, User};
use crate::validation::enum_member;

fn validate_role(role: &str) -> Result<(), ValidationError> {
    enum_member(role, &["user", "admin"], "Role must be \"user\" or \"admin\"")
}

/// Signup request. Role is optional and defaults to "user".
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(custom(function = validate_role))]
    pub role: Option<String>,
}

impl SignupRequest {
    /// Requested role, defaulting to `Role::User`. Call after validation.
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or(Role::User)
    }
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response for signup and login: a status message plus the user, with
/// the session token set as a cookie rather than in the body.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

/// User information safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Minimal user reference nested inside issue and comment responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
    pub email: String,
}
