//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::state::{AppState, SiteMeta};
use crate::web::views::{ExperienceView, PortfolioView, PostCardView};

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Name, intro and location from the site configuration
/// - Experience rows and portfolio items in display order
/// - The three most recent published posts
/// - Contact section
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: SiteMeta,
    pub experience: Vec<ExperienceView>,
    pub portfolio: Vec<PortfolioView>,
    pub posts: Vec<PostCardView>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Degradation
///
/// A failing section query is logged and rendered as that section's empty
/// state; the page itself never errors.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let experience = or_empty(state.experience_service.list().await, "Experience");
    let portfolio = or_empty(state.portfolio_service.list().await, "Portfolio");
    let posts = or_empty(state.post_service.list_published(Some(3)).await, "Posts");

    HomeTemplate {
        site: state.site.clone(),
        experience: experience.into_iter().map(ExperienceView::from).collect(),
        portfolio: portfolio.into_iter().map(PortfolioView::from).collect(),
        posts: posts.into_iter().map(PostCardView::from).collect(),
    }
}

/// Logs a failed section query and substitutes an empty list.
fn or_empty<T>(result: Result<Vec<T>, AppError>, section: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!("{} query failed: {}", section, e);
        Vec::new()
    })
}
