//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

/// PostgreSQL repository for blog post storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. The
/// `published_at` column is resolved inside the statements so the stamp and
/// the row write happen atomically.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, slug, subtitle, cover_image_url, body_html, published, published_at)
            VALUES ($1, $2, $3, $4, $5, $6,
                    CASE WHEN $6 THEN COALESCE($7, now()) ELSE NULL END)
            RETURNING *
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.slug)
        .bind(&new_post.subtitle)
        .bind(&new_post.cover_image_url)
        .bind(&new_post.body_html)
        .bind(new_post.published)
        .bind(new_post.published_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(post)
    }

    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, AppError> {
        // Column references in SET expressions read the pre-update value, so
        // an already-published post keeps its original timestamp.
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2,
                slug = $3,
                subtitle = $4,
                cover_image_url = $5,
                body_html = $6,
                published = $7,
                published_at = CASE WHEN $7 THEN COALESCE($8, published_at, now()) ELSE NULL END,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.slug)
        .bind(&update.subtitle)
        .bind(&update.cover_image_url)
        .bind(&update.body_html)
        .bind(update.published)
        .bind(update.published_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        post.ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        let posts =
            sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY created_at DESC, id DESC")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(posts)
    }

    async fn list_published(&self, limit: Option<i64>) -> Result<Vec<Post>, AppError> {
        // LIMIT NULL is LIMIT ALL in Postgres, so one statement covers both cases.
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts
            WHERE published
            ORDER BY published_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(posts)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE slug = $1 AND published")
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(post)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
