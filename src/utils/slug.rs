//! Slug validation for blog post URLs.
//!
//! Slugs become path segments under `/blog/`, so the accepted alphabet is
//! deliberately narrow.

use crate::error::AppError;
use serde_json::json;

/// Maximum slug length in characters.
const MAX_SLUG_LENGTH: usize = 100;

/// Route words that cannot be used as slugs to prevent confusing URLs.
const RESERVED_SLUGS: &[&str] = &["admin", "api", "blog", "health", "login", "resume", "static"];

/// Validates a post slug.
///
/// # Rules
///
/// - Length: 1-100 characters
/// - Allowed characters: lowercase letters, digits, hyphens
/// - Cannot start or end with a hyphen
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_slug("hello-world").is_ok());
/// assert!(validate_slug("post-2025").is_ok());
///
/// assert!(validate_slug("").is_err());            // Empty
/// assert!(validate_slug("Hello").is_err());       // Uppercase
/// assert!(validate_slug("-hello").is_err());      // Starts with hyphen
/// assert!(validate_slug("admin").is_err());       // Reserved
/// ```
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Slug must be 1-100 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::bad_request(
            "Slug can only contain lowercase letters, digits, and hyphens",
            json!({ "slug": slug }),
        ));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::bad_request(
            "Slug cannot start or end with a hyphen",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_slug() {
        assert!(validate_slug("hello").is_ok());
    }

    #[test]
    fn test_validate_with_hyphens_and_digits() {
        assert!(validate_slug("my-first-post-2025").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        let slug = "a".repeat(100);
        assert!(validate_slug(&slug).is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let result = validate_slug("");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("1-100 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        let slug = "a".repeat(101);
        assert!(validate_slug(&slug).is_err());
    }

    #[test]
    fn test_validate_uppercase() {
        let result = validate_slug("Hello-World");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn test_validate_spaces() {
        assert!(validate_slug("hello world").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_slug("hello_world").is_err());
        assert!(validate_slug("hello/world").is_err());
        assert!(validate_slug("héllo").is_err());
    }

    #[test]
    fn test_validate_starts_with_hyphen() {
        let result = validate_slug("-hello");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("cannot start or end"));
    }

    #[test]
    fn test_validate_ends_with_hyphen() {
        assert!(validate_slug("hello-").is_err());
    }

    #[test]
    fn test_validate_all_reserved_slugs() {
        for &reserved in RESERVED_SLUGS {
            let result = validate_slug(reserved);
            assert!(result.is_err(), "Reserved slug '{}' should be rejected", reserved);
        }
    }

    #[test]
    fn test_validate_reserved_word_as_prefix_is_allowed() {
        assert!(validate_slug("admin-tips").is_ok());
        assert!(validate_slug("blog-roundup").is_ok());
    }
}
