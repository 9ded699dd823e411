//! Blog list and post detail page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::web::views::{self, PostCardView};

/// Template for the blog index.
///
/// Renders `templates/blog_list.html` with published posts, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "blog_list.html")]
pub struct BlogListTemplate {
    pub posts: Vec<PostCardView>,
}

/// Template for a single post.
///
/// Renders `templates/blog_post.html`; the body is an admin-authored HTML
/// fragment inserted unescaped.
#[derive(Template, WebTemplate)]
#[template(path = "blog_post.html")]
pub struct BlogPostTemplate {
    pub title: String,
    pub date_label: Option<String>,
    pub body_html: String,
}

/// Template for missing or unpublished posts.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Renders the blog index with every published post.
///
/// # Endpoint
///
/// `GET /blog`
///
/// # Degradation
///
/// A failing query is logged and rendered as the empty state, never an
/// error page.
pub async fn blog_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let posts = match state.post_service.list_published(None).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Blog list query failed: {}", e);
            Vec::new()
        }
    };

    BlogListTemplate {
        posts: posts.into_iter().map(PostCardView::from).collect(),
    }
}

/// Renders a single published post.
///
/// # Endpoint
///
/// `GET /blog/{slug}`
///
/// Drafts are indistinguishable from missing posts: both render the
/// not-found page with a 404 status.
pub async fn blog_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let post = match state.post_service.find_published_by_slug(&slug).await {
        Ok(post) => post,
        Err(e) => {
            tracing::error!("Post lookup for '{}' failed: {}", slug, e);
            None
        }
    };

    match post {
        Some(post) => BlogPostTemplate {
            date_label: post.published_at.as_ref().map(views::format_date),
            title: post.title,
            body_html: post.body_html,
        }
        .into_response(),
        None => (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response(),
    }
}
