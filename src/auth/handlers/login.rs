/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Looks the user up by email, verifies the password against the stored
 * bcrypt hash, and sets the session cookie.
 *
 * # Security
 *
 * A lookup miss and a password mismatch produce the identical
 * `401 {"error":"Invalid credentials"}` response, so the client cannot
 * tell which part failed.
 */

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::session_cookie;
use crate::auth::users::{find_user_by_email, verify_password};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::ValidatedJson;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = find_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.sessions.issue(user.id)?;
    let jar = jar.add(session_cookie(token, state.config.secure_cookies));

    tracing::info!("User logged in: {}", user.email);

    Ok((
        jar,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: user.into(),
        }),
    ))
}
