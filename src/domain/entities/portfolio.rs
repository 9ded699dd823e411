//! Portfolio item entity.

use chrono::{DateTime, Utc};

/// A project card shown on the home page.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PortfolioItem {
    pub id: i64,
    pub name: String,
    pub link: Option<String>,
    /// Either an image URL or a short emoji used as the card icon.
    pub icon_url: Option<String>,
    pub blurb: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a portfolio item.
#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub name: String,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub blurb: Option<String>,
    pub sort_order: i32,
}

/// Full replacement payload for an existing item.
#[derive(Debug, Clone)]
pub struct PortfolioItemUpdate {
    pub name: String,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub blurb: Option<String>,
    pub sort_order: i32,
}
