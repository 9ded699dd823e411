//! PostgreSQL implementation of the experience repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ExperienceEntry, ExperienceUpdate, NewExperienceEntry};
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;

/// PostgreSQL repository for experience entries.
pub struct PgExperienceRepository {
    pool: Arc<PgPool>,
}

impl PgExperienceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for PgExperienceRepository {
    async fn create(&self, entry: NewExperienceEntry) -> Result<ExperienceEntry, AppError> {
        let entry = sqlx::query_as::<_, ExperienceEntry>(
            r#"
            INSERT INTO experience (name, role, status_tag, years, blurb, link, icon_url, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.role)
        .bind(&entry.status_tag)
        .bind(&entry.years)
        .bind(&entry.blurb)
        .bind(&entry.link)
        .bind(&entry.icon_url)
        .bind(entry.sort_order)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn update(&self, id: i64, update: ExperienceUpdate) -> Result<ExperienceEntry, AppError> {
        let entry = sqlx::query_as::<_, ExperienceEntry>(
            r#"
            UPDATE experience
            SET name = $2,
                role = $3,
                status_tag = $4,
                years = $5,
                blurb = $6,
                link = $7,
                icon_url = $8,
                sort_order = $9,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.role)
        .bind(&update.status_tag)
        .bind(&update.years)
        .bind(&update.blurb)
        .bind(&update.link)
        .bind(&update.icon_url)
        .bind(update.sort_order)
        .fetch_optional(self.pool.as_ref())
        .await?;

        entry.ok_or_else(|| AppError::not_found("Experience entry not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<ExperienceEntry>, AppError> {
        let entries = sqlx::query_as::<_, ExperienceEntry>(
            "SELECT * FROM experience ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(entries)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM experience")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
