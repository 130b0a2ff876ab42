/**
 * Logout Handler
 *
 * POST /api/auth/logout
 *
 * Sessions are stateless, so logout is purely a cookie operation: the
 * response replaces the session cookie with an immediately expiring one.
 * The token itself remains valid until its expiry; nothing is revoked
 * server-side.
 */

use axum::Json;
use axum_extra::extract::CookieJar;

use crate::auth::sessions::clear_session_cookie;

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.add(clear_session_cookie());
    (
        jar,
        Json(serde_json::json!({ "message": "Logout successful" })),
    )
}
