/**
 * Access Gate
 *
 * Middleware run before every route. It:
 *
 * 1. Lets public paths (login, signup, static assets) through untouched
 * 2. Extracts the session token from the `session` cookie
 * 3. Verifies the token and re-fetches the user row by id — the role is
 *    always re-read from the database, never trusted from the token, so
 *    role changes take effect immediately
 * 4. Attaches `CurrentUser` to request extensions for handlers
 *
 * Every failure mode (missing cookie, malformed or expired token, user
 * no longer exists) collapses into one unauthenticated outcome: a JSON
 * `401` for API paths, a redirect to the login page for browser paths.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::sessions::SESSION_COOKIE;
use crate::auth::users::{find_user_by_id, Role};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/login", "/signup", "/api/auth/login", "/api/auth/signup"];

/// The acting user, resolved by the access gate from a live database row.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || path.starts_with("/static")
}

/// Authentication middleware applied to the whole router.
pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_public(&path) {
        return next.run(request).await;
    }

    match resolve_user(&state, &jar).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => deny(&path),
    }
}

/// Resolve the session cookie into a live user, or `None` on any failure.
async fn resolve_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let token = jar.get(SESSION_COOKIE)?.value();

    let claims = state
        .sessions
        .verify(token)
        .map_err(|e| tracing::debug!("Session token rejected: {}", e))
        .ok()?;

    let user_id = claims.user_id().ok()?;

    let user = find_user_by_id(&state.pool, user_id)
        .await
        .map_err(|e| tracing::error!("User lookup failed in access gate: {}", e))
        .ok()??;

    Some(CurrentUser {
        id: user.id,
        email: user.email,
        role: user.role,
    })
}

/// The single deny outcome, branched on request class.
fn deny(path: &str) -> Response {
    if path.starts_with("/api/") {
        ApiError::Unauthenticated.into_response()
    } else {
        Redirect::temporary("/login").into_response()
    }
}

/// Extractor handing the gate-resolved identity to handlers.
///
/// Handlers take `AuthUser` as a parameter; the inner `CurrentUser` was
/// placed in request extensions by [`access_gate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser missing from request extensions");
                ApiError::Unauthenticated
            })
    }
}
