//! Text normalization helpers for admin payloads.
//!
//! Admin forms submit whatever the browser holds, so every string field is
//! trimmed before it reaches the database, and blank optional fields are
//! stored as `NULL` rather than empty strings.

/// Trims surrounding whitespace from a required field.
pub fn clean(value: &str) -> String {
    value.trim().to_string()
}

/// Trims an optional field, mapping blank or missing input to `None`.
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_whitespace() {
        assert_eq!(clean("  hello  "), "hello");
        assert_eq!(clean("hello"), "hello");
        assert_eq!(clean("\n\ttabbed\n"), "tabbed");
    }

    #[test]
    fn test_clean_optional_drops_blank() {
        assert_eq!(clean_optional(Some("  ".to_string())), None);
        assert_eq!(clean_optional(Some(String::new())), None);
        assert_eq!(clean_optional(None), None);
    }

    #[test]
    fn test_clean_optional_trims_value() {
        assert_eq!(
            clean_optional(Some("  kept  ".to_string())),
            Some("kept".to_string())
        );
    }
}
