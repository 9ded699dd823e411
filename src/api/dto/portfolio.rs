//! DTOs for portfolio item management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/admin/portfolio`.
///
/// `name` is required after trimming.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolioRequest {
    #[serde(default)]
    pub name: String,

    pub link: Option<String>,

    /// Emoji literal or image URL.
    pub icon_url: Option<String>,

    pub blurb: Option<String>,

    /// Ascending display position; defaults to 0.
    pub sort_order: Option<i32>,
}

/// Request body for `PUT /api/admin/portfolio`.
#[derive(Debug, Deserialize)]
pub struct UpdatePortfolioRequest {
    /// Row to update; 400 when absent.
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    pub link: Option<String>,

    pub icon_url: Option<String>,

    pub blurb: Option<String>,

    pub sort_order: Option<i32>,
}

/// Individual portfolio row as returned to the admin panel.
#[derive(Debug, Serialize)]
pub struct PortfolioItemDto {
    pub id: i64,
    pub name: String,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub blurb: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response containing the portfolio list, sorted for display.
#[derive(Debug, Serialize)]
pub struct PortfolioListResponse {
    pub items: Vec<PortfolioItemDto>,
}
