//! Request extractors shared by API handlers.

use crate::error::AppError;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Extracts a body as JSON or an urlencoded form, dispatching on the
/// `Content-Type` header.
///
/// The login endpoint is called both by `fetch` with a JSON body and by the
/// plain HTML login form; this extractor accepts either without duplicating
/// the handler.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
            })?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid form body", json!({ "reason": e.to_string() }))
        })?;
        Ok(Self(payload))
    }
}
