/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * 1. Validate email format, password length, optional role
 * 2. Reject already-registered emails
 * 3. Hash the password and create the user
 * 4. Issue a session token and set the session cookie
 *
 * # Errors
 *
 * - `400` with field details on validation failure
 * - `400 {"error":"User already exists"}` on duplicate email
 * - `500` on hashing, database, or token failure
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::session_cookie;
use crate::auth::users::{create_user, find_user_by_email, hash_password};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::validation::ValidatedJson;

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(CookieJar, (StatusCode, Json<AuthResponse>)), ApiError> {
    tracing::info!("Signup request for: {}", request.email);

    if find_user_by_email(&state.pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Signup with already-registered email: {}", request.email);
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(&state.pool, &request.email, &password_hash, request.role())
        .await
        .map_err(|e| match &e {
            // Lost the race against a concurrent signup with the same email.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("User already exists".to_string())
            }
            _ => ApiError::from(e),
        })?;

    let token = state.sessions.issue(user.id)?;
    let jar = jar.add(session_cookie(token, state.config.secure_cookies));

    tracing::info!("User created: {}", user.email);

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(AuthResponse {
                message: "User created successfully".to_string(),
                user: user.into(),
            }),
        ),
    ))
}
