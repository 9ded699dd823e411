//! Blog post entity.

use chrono::{DateTime, Utc};

/// A blog post as stored in the database.
///
/// `body_html` holds sanitized-at-the-edge editor output and is rendered
/// verbatim on the public post page. `published_at` is set only while the
/// post is published; unpublishing clears it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
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

impl Post {
    /// Returns true if the post is visible on the public blog.
    pub fn is_public(&self) -> bool {
        self.published
    }
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub body_html: String,
    pub published: bool,
    /// Explicit publication time. When `None` and `published` is true,
    /// the repository stamps the current time.
    pub published_at: Option<DateTime<Utc>>,
}

/// Full replacement payload for an existing post.
///
/// Every field overwrites the stored value. `published_at` follows the same
/// rule as creation, except an already-published post keeps its original
/// timestamp when the payload carries none.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub body_html: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(published: bool) -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            subtitle: None,
            cover_image_url: None,
            body_html: "<p>hi</p>".to_string(),
            published,
            published_at: published.then(Utc::now),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_public() {
        assert!(sample_post(true).is_public());
        assert!(!sample_post(false).is_public());
    }

    #[test]
    fn test_draft_has_no_published_at() {
        let post = sample_post(false);
        assert!(post.published_at.is_none());
    }
}
