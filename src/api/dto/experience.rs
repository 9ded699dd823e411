//! DTOs for experience entry management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/admin/experience`.
///
/// `name` and `role` are required after trimming.
#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    /// Free-form tag rendered as a badge, e.g. "Current" or "Exited".
    pub status_tag: Option<String>,

    /// Free-form years range, e.g. "2025-Present".
    pub years: Option<String>,

    pub blurb: Option<String>,

    pub link: Option<String>,

    /// Emoji literal or image URL.
    pub icon_url: Option<String>,

    /// Ascending display position; defaults to 0.
    pub sort_order: Option<i32>,
}

/// Request body for `PUT /api/admin/experience`.
#[derive(Debug, Deserialize)]
pub struct UpdateExperienceRequest {
    /// Row to update; 400 when absent.
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    pub status_tag: Option<String>,

    pub years: Option<String>,

    pub blurb: Option<String>,

    pub link: Option<String>,

    pub icon_url: Option<String>,

    pub sort_order: Option<i32>,
}

/// Individual experience row as returned to the admin panel.
#[derive(Debug, Serialize)]
pub struct ExperienceItem {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub icon_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response containing the experience list, sorted for display.
#[derive(Debug, Serialize)]
pub struct ExperienceListResponse {
    pub items: Vec<ExperienceItem>,
}
