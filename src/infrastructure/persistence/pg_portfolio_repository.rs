//! PostgreSQL implementation of the portfolio repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPortfolioItem, PortfolioItem, PortfolioItemUpdate};
use crate::domain::repositories::PortfolioRepository;
use crate::error::AppError;

/// PostgreSQL repository for portfolio items.
pub struct PgPortfolioRepository {
    pool: Arc<PgPool>,
}

impl PgPortfolioRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PgPortfolioRepository {
    async fn create(&self, item: NewPortfolioItem) -> Result<PortfolioItem, AppError> {
        let item = sqlx::query_as::<_, PortfolioItem>(
            r#"
            INSERT INTO portfolio (name, link, icon_url, blurb, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&item.name)
        .bind(&item.link)
        .bind(&item.icon_url)
        .bind(&item.blurb)
        .bind(item.sort_order)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        update: PortfolioItemUpdate,
    ) -> Result<PortfolioItem, AppError> {
        let item = sqlx::query_as::<_, PortfolioItem>(
            r#"
            UPDATE portfolio
            SET name = $2,
                link = $3,
                icon_url = $4,
                blurb = $5,
                sort_order = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.link)
        .bind(&update.icon_url)
        .bind(&update.blurb)
        .bind(update.sort_order)
        .fetch_optional(self.pool.as_ref())
        .await?;

        item.ok_or_else(|| AppError::not_found("Portfolio item not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM portfolio WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<PortfolioItem>, AppError> {
        let items = sqlx::query_as::<_, PortfolioItem>(
            "SELECT * FROM portfolio ORDER BY sort_order ASC, id ASC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(items)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM portfolio")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
