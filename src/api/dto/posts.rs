//! DTOs for blog post management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/admin/posts`.
///
/// `title` and `slug` are required after trimming; the service rejects blank
/// values. `body_html` defaults to an empty fragment, `published_at` to the
/// save time when `published` is set.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: String,

    pub subtitle: Option<String>,

    /// External cover image URL, usually filled by the upload endpoint.
    pub cover_image_url: Option<String>,

    /// Rich HTML fragment produced by the admin editor.
    pub body_html: Option<String>,

    #[serde(default)]
    pub published: bool,

    /// Explicit publish timestamp; omitted = stamped server-side.
    pub published_at: Option<DateTime<Utc>>,
}

/// Request body for `PUT /api/admin/posts`.
///
/// Same shape as create plus the row id. All mutable fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    /// Row to update; 400 when absent.
    pub id: Option<i64>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: String,

    pub subtitle: Option<String>,

    pub cover_image_url: Option<String>,

    pub body_html: Option<String>,

    #[serde(default)]
    pub published: bool,

    pub published_at: Option<DateTime<Utc>>,
}

/// Individual post row as returned to the admin panel.
#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub body_html: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response containing the admin post list.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostItem>,
}
