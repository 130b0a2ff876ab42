/**
 * Session Token Codec
 *
 * Sessions are signed, self-contained JWTs carried in an httpOnly cookie
 * named `session`. Nothing is persisted server-side; a token is valid iff
 * its HS256 signature checks out against the configured secret and its
 * expiry is in the future.
 *
 * The codec is built once from `AppConfig` and injected through
 * `AppState` — it never reads ambient configuration.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Session lifetime: 24 hours, for both the token expiry and the cookie
/// Max-Age.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a user id.
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Encodes and verifies session tokens.
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl SessionCodec {
    /// Build a codec from the signing secret.
    ///
    /// Verification is pinned to HS256: tokens signed with any other
    /// algorithm (including "none") are rejected outright.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a token for a user, expiring 24 hours from now.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token's signature, algorithm, and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

/// Build the session cookie for a freshly issued token.
///
/// httpOnly, SameSite=Lax, Max-Age 24h; Secure when the deployment says
/// so.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(SESSION_TTL_SECS))
        .build()
}

/// Build an immediately expiring session cookie, used by logout.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}
