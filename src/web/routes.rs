//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    admin_handler, blog_list_handler, blog_post_handler, home_handler, login_page_handler,
    resume_handler,
};
use axum::{Router, routing::get};

/// Protected admin pages requiring the admin cookie.
///
/// Protected via [`crate::web::middleware::web_auth`]; unauthenticated
/// visitors are redirected to the login page.
///
/// # Endpoints
///
/// - `GET /admin` - Content management panel
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/admin", get(admin_handler))
}

/// Public pages without authentication.
///
/// # Endpoints
///
/// - `GET /` - Home page with experience, portfolio and latest posts
/// - `GET /blog` - Published post index
/// - `GET /blog/{slug}` - Published post detail
/// - `GET /resume` - Resume download page
/// - `GET /admin/login` - Admin login form
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/blog", get(blog_list_handler))
        .route("/blog/{slug}", get(blog_post_handler))
        .route("/resume", get(resume_handler))
        .route("/admin/login", get(login_page_handler))
}
