//! DTO for the admin login endpoint.

use serde::Deserialize;

/// Request body for `POST /api/admin/login`.
///
/// Accepted as JSON or an urlencoded form (the login page posts a plain
/// form). A missing field deserializes to an empty string, which never
/// matches the configured secret.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}
