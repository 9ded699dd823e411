//! View models for the server-rendered pages.
//!
//! Entities are mapped into flat, display-ready structs so the templates
//! stay free of formatting logic: dates become labels, icons are split into
//! image/emoji variants, links get a scheme when the admin typed a bare
//! domain.

use crate::domain::entities::{ExperienceEntry, PortfolioItem, Post};
use chrono::{DateTime, Utc};

/// Formats a publish timestamp as a short date label, e.g. "Mar 9, 2026".
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// A post as shown on the home page and blog list cards.
pub struct PostCardView {
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub date_label: Option<String>,
}

impl From<Post> for PostCardView {
    fn from(p: Post) -> Self {
        Self {
            title: p.title,
            slug: p.slug,
            subtitle: p.subtitle,
            cover_image_url: p.cover_image_url,
            date_label: p.published_at.as_ref().map(format_date),
        }
    }
}

/// An experience row as shown in the Jobs section.
pub struct ExperienceView {
    pub name: String,
    pub role: String,
    pub status_tag: Option<String>,
    pub years: Option<String>,
    pub blurb: Option<String>,
    /// Raw link text, shown under the name.
    pub link: Option<String>,
    /// Link with a scheme, usable as an href.
    pub href: Option<String>,
    pub icon_image: Option<String>,
    pub icon_emoji: Option<String>,
}

impl From<ExperienceEntry> for ExperienceView {
    fn from(e: ExperienceEntry) -> Self {
        let (icon_image, icon_emoji) = split_icon(e.icon_url);
        Self {
            href: e.link.as_deref().map(external_href),
            name: e.name,
            role: e.role,
            status_tag: e.status_tag,
            years: e.years,
            blurb: e.blurb,
            link: e.link,
            icon_image,
            icon_emoji,
        }
    }
}

/// A portfolio row as shown in the Portfolio section.
pub struct PortfolioView {
    pub name: String,
    pub blurb: Option<String>,
    pub link: Option<String>,
    pub href: Option<String>,
    pub icon_image: Option<String>,
    pub icon_emoji: Option<String>,
}

impl From<PortfolioItem> for PortfolioView {
    fn from(p: PortfolioItem) -> Self {
        let (icon_image, icon_emoji) = split_icon(p.icon_url);
        Self {
            href: p.link.as_deref().map(external_href),
            name: p.name,
            blurb: p.blurb,
            link: p.link,
            icon_image,
            icon_emoji,
        }
    }
}

/// Prefixes `https://` when the admin stored a bare domain.
fn external_href(link: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

/// Splits the stored icon into an image URL or an emoji literal.
///
/// Anything starting with `http://`, `https://` or `/` renders as an image;
/// everything else is treated as emoji text.
fn split_icon(icon_url: Option<String>) -> (Option<String>, Option<String>) {
    match icon_url {
        Some(icon)
            if icon.starts_with("http://")
                || icon.starts_with("https://")
                || icon.starts_with('/') =>
        {
            (Some(icon), None)
        }
        Some(icon) => (None, Some(icon)),
        None => (None, None),
    }
}
