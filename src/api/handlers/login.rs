//! Handler for the admin login endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::api::dto::login::LoginRequest;
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies the shared admin secret and establishes the admin session.
///
/// # Endpoint
///
/// `POST /api/admin/login`
///
/// Accepts a JSON body `{"password": "…"}` or an urlencoded form with a
/// `password` field, which is what the plain login page posts.
///
/// # Response
///
/// On success, sets the `admin` session cookie (`HttpOnly`, `SameSite=Lax`,
/// 7 day max-age) and answers `303 See Other` pointing at `/admin`, so both
/// the form flow and `fetch` land on the panel.
///
/// # Errors
///
/// Returns 401 when the password does not match the configured secret.
pub async fn login_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !state.auth_service.verify_password(&payload.password) {
        metrics::counter!("admin_login_failures_total").increment(1);
        tracing::warn!("Admin login attempt with wrong password");

        return Err(AppError::unauthorized("Invalid password", json!({})));
    }

    tracing::info!("Admin login succeeded");

    Ok((
        [(header::SET_COOKIE, state.auth_service.login_cookie())],
        Redirect::to("/admin"),
    ))
}
