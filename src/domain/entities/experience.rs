//! Experience entry entity for the jobs timeline.

use chrono::{DateTime, Utc};

/// A single position in the jobs section of the home page.
///
/// Rows are ordered by `sort_order` ascending; ties fall back to insertion
/// order via `id`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExperienceEntry {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Short badge text such as "Current" or "2019-2021"; hidden when absent.
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating an experience entry.
#[derive(Debug, Clone)]
pub struct NewExperienceEntry {
    pub name: String,
    pub role: String,
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
}

/// Full replacement payload for an existing entry.
#[derive(Debug, Clone)]
pub struct ExperienceUpdate {
    pub name: String,
    pub role: String,
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
}
