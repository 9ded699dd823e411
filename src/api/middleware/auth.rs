//! Admin cookie authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Authenticates API requests using the admin session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: admin=1
/// ```
///
/// # Authentication Flow
///
/// 1. Read the `Cookie` header from the request
/// 2. Look for the `admin` cookie and compare its value to the expected literal
/// 3. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if the cookie is missing or carries any other
/// value. Applied to every `/api/admin/*` route except login.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/admin/posts", get(list_posts_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.auth_service.is_authorized(req.headers()) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Admin session cookie is missing or invalid"}),
        ));
    }

    Ok(next.run(req).await)
}
