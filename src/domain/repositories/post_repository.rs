//! Repository trait for blog post data access.

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blog posts.
///
/// Covers the admin CRUD surface plus the two public read paths: the
/// published listing and slug lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post.
    ///
    /// When `new_post.published` is true and `published_at` is `None`, the
    /// implementation stamps the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Upstream`] on database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Replaces an existing post with the given payload.
    ///
    /// `published_at` resolution: when the payload publishes the post, the
    /// stored value becomes payload timestamp, else the existing timestamp,
    /// else now. When the payload unpublishes, it is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has the given id.
    /// Returns [`AppError::Conflict`] if the new slug collides.
    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, AppError>;

    /// Deletes a post by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no post matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds a post by id regardless of publication state.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists every post, drafts included, newest created first.
    ///
    /// Backs the admin panel listing.
    async fn list_all(&self) -> Result<Vec<Post>, AppError>;

    /// Lists published posts ordered by `published_at` descending.
    ///
    /// `limit` caps the result; `None` returns all published posts.
    async fn list_published(&self, limit: Option<i64>) -> Result<Vec<Post>, AppError>;

    /// Finds a published post by slug.
    ///
    /// Drafts are invisible here even when the slug matches.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;

    /// Counts all posts, drafts included.
    async fn count(&self) -> Result<i64, AppError>;
}
