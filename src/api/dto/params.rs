//! Shared query parameters for the admin API.

use crate::error::AppError;
use serde::Deserialize;
use serde_json::json;

/// Query parameters for `DELETE /api/admin/{posts,experience,portfolio}`.
///
/// The wire shape is `?id=<row id>`; the id is deliberately not part of the
/// path so all verbs of one entity share a single route.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub id: Option<i64>,
}

impl DeleteParams {
    /// Returns the row id or a 400 when the parameter is absent.
    pub fn require_id(&self) -> Result<i64, AppError> {
        self.id
            .ok_or_else(|| AppError::bad_request("Missing id", json!({ "param": "id" })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_present() {
        let params = DeleteParams { id: Some(42) };
        assert_eq!(params.require_id().unwrap(), 42);
    }

    #[test]
    fn test_require_id_absent_is_validation_error() {
        let params = DeleteParams { id: None };
        let err = params.require_id().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Missing id");
    }

    #[test]
    fn test_deserializes_with_id() {
        let params: DeleteParams = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(params.id, Some(7));
    }

    #[test]
    fn test_deserializes_without_id() {
        let params: DeleteParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.id, None);
    }
}
