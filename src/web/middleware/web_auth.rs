//! Cookie-based authentication middleware for the admin panel.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Authenticates admin page requests using the admin session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: admin=1
/// ```
///
/// # Authentication Flow
///
/// 1. Parse the `Cookie` header via
///    [`crate::application::services::AuthService::is_authorized`]
/// 2. On success, continue to handler
/// 3. On failure or missing cookie, redirect to `/admin/login`
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page for a better user experience
/// in a browser context.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/admin", get(admin_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    if st.auth_service.is_authorized(req.headers()) {
        Ok(next.run(req).await)
    } else {
        Err(Redirect::to("/admin/login"))
    }
}
