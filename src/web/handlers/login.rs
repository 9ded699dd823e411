//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
///
/// Renders `templates/login.html` with a single password form posting to
/// `POST /api/admin/login`.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the admin login page.
///
/// # Endpoint
///
/// `GET /admin/login`
///
/// # Authentication
///
/// On a successful login the API endpoint sets the admin cookie and
/// redirects back to `/admin`.
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}
