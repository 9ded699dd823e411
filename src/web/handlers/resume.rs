//! Resume page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the resume page.
///
/// Renders `templates/resume.html`, which links the PDF served from
/// `/static/resume.pdf`. The PDF itself is a deploy-time asset.
#[derive(Template, WebTemplate)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {}

/// Renders the resume page.
///
/// # Endpoint
///
/// `GET /resume`
pub async fn resume_handler() -> impl IntoResponse {
    ResumeTemplate {}
}
