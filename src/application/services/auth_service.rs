//! Admin session authentication.

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};

/// Name of the admin session cookie.
pub const ADMIN_COOKIE_NAME: &str = "admin";

/// Value the admin session cookie must carry.
pub const ADMIN_COOKIE_VALUE: &str = "1";

/// Cookie lifetime in seconds (7 days).
const COOKIE_MAX_AGE_SECONDS: u64 = 604_800;

/// Service for checking the admin secret and the session cookie.
///
/// The site has a single administrator, so a session is nothing more than a
/// well-known cookie handed out after a successful password check. All
/// mutating routes and the admin pages look for that cookie.
pub struct AuthService {
    admin_password: String,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(admin_password: String) -> Self {
        Self { admin_password }
    }

    /// Checks a login attempt against the configured secret.
    ///
    /// Both sides are hashed before comparison, so the check never
    /// short-circuits on a matching prefix of the real password.
    pub fn verify_password(&self, candidate: &str) -> bool {
        Sha256::digest(candidate.as_bytes()) == Sha256::digest(self.admin_password.as_bytes())
    }

    /// Builds the `Set-Cookie` value for a successful login.
    pub fn login_cookie(&self) -> String {
        format!(
            "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax; Secure",
            ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE, COOKIE_MAX_AGE_SECONDS
        )
    }

    /// Returns whether the request carries a valid admin session cookie.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(has_admin_cookie)
    }
}

/// Scans a `Cookie` header for `admin=1`.
///
/// Pairs are separated by `;` and may carry surrounding whitespace; values
/// other than the expected literal do not count as a session.
fn has_admin_cookie(header: &str) -> bool {
    header.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(ADMIN_COOKIE_NAME) && parts.next() == Some(ADMIN_COOKIE_VALUE)
    })
}
