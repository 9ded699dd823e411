//! Blog post management service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::infrastructure::media::{ImageHost, delete_best_effort, public_id::parse_public_id};
use crate::utils::slug::validate_slug;
use crate::utils::text;

/// Raw admin payload for creating or replacing a post.
///
/// Fields arrive as the admin form submitted them; normalization happens in
/// the service.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub body_html: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Service for creating, editing, and deleting blog posts.
///
/// Owns the coupling between a post row and its hosted cover image: deleting
/// a post also removes the image from the host when the cover URL points
/// there.
pub struct PostService<R: PostRepository> {
    repository: Arc<R>,
    image_host: Arc<dyn ImageHost>,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a new post service.
    pub fn new(repository: Arc<R>, image_host: Arc<dyn ImageHost>) -> Self {
        Self {
            repository,
            image_host,
        }
    }

    /// Creates a post from an admin payload.
    ///
    /// All text fields are trimmed; blank optional fields become `NULL`. A
    /// missing body is stored as an empty string so the editor always has
    /// something to load.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or slug is blank or the slug
    /// is malformed. Returns [`AppError::Conflict`] if the slug is taken.
    pub async fn create(&self, input: PostInput) -> Result<Post, AppError> {
        let input = normalize(input)?;

        let post = self
            .repository
            .create(NewPost {
                title: input.title,
                slug: input.slug,
                subtitle: input.subtitle,
                cover_image_url: input.cover_image_url,
                body_html: input.body_html.unwrap_or_default(),
                published: input.published,
                published_at: input.published_at,
            })
            .await?;

        metrics::counter!("posts_created_total").increment(1);

        Ok(post)
    }

    /// Replaces an existing post with an admin payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist, plus the same
    /// validation errors as [`Self::create`].
    pub async fn update(&self, id: i64, input: PostInput) -> Result<Post, AppError> {
        let input = normalize(input)?;

        self.repository
            .update(
                id,
                PostUpdate {
                    title: input.title,
                    slug: input.slug,
                    subtitle: input.subtitle,
                    cover_image_url: input.cover_image_url,
                    body_html: input.body_html.unwrap_or_default(),
                    published: input.published,
                    published_at: input.published_at,
                },
            )
            .await
    }

    /// Deletes a post and its hosted cover image.
    ///
    /// The image delete is best-effort: a dead image host never blocks the
    /// row's removal. Cover URLs pointing somewhere other than the image host
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let Some(post) = self.repository.find_by_id(id).await? else {
            return Err(AppError::not_found("Post not found", json!({ "id": id })));
        };

        if let Some(url) = post.cover_image_url.as_deref() {
            match parse_public_id(url) {
                Some(public_id) => {
                    delete_best_effort(self.image_host.as_ref(), &public_id).await;
                }
                None => debug!("Cover image is not hosted, skipping delete: {}", url),
            }
        }

        self.repository.delete(id).await?;
        Ok(())
    }

    /// Lists every post for the admin panel, newest created first.
    pub async fn list_for_admin(&self) -> Result<Vec<Post>, AppError> {
        self.repository.list_all().await
    }

    /// Lists published posts for the public blog, newest published first.
    pub async fn list_published(&self, limit: Option<i64>) -> Result<Vec<Post>, AppError> {
        self.repository.list_published(limit).await
    }

    /// Finds a published post by slug for the public post page.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        self.repository.find_published_by_slug(slug).await
    }

    /// Counts all posts, drafts included.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Trims every text field, drops blank optionals, and validates the
/// required ones.
fn normalize(mut input: PostInput) -> Result<PostInput, AppError> {
    input.title = text::clean(&input.title);
    input.slug = text::clean(&input.slug);
    input.subtitle = text::clean_optional(input.subtitle);
    input.cover_image_url = text::clean_optional(input.cover_image_url);

    if input.title.is_empty() || input.slug.is_empty() {
        return Err(AppError::bad_request(
            "Title and slug are required",
            json!({
                "title_present": !input.title.is_empty(),
                "slug_present": !input.slug.is_empty(),
            }),
        ));
    }

    validate_slug(&input.slug)?;

    Ok(input)
}
