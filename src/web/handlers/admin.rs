//! Admin panel page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the admin panel shell.
///
/// Renders `templates/admin.html` with:
/// - Post form with the rich-text editor and cover upload
/// - Existing posts list
/// - Experience and portfolio forms and lists
///
/// The shell is static; `static/admin.js` loads and mutates content through
/// `/api/admin/*`.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {}

/// Renders the admin panel.
///
/// # Endpoint
///
/// `GET /admin`
///
/// # Authentication
///
/// Protected by [`crate::web::middleware::web_auth`]; unauthenticated
/// visitors are redirected to `/admin/login`.
pub async fn admin_handler() -> impl IntoResponse {
    AdminTemplate {}
}
