//! Handler for the image upload endpoint.

use axum::{Json, extract::Multipart, extract::State};
use serde_json::json;

use crate::api::dto::upload::UploadResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Uploads an image to the external host and returns its delivery URL.
///
/// # Endpoint
///
/// `POST /api/admin/upload-image`
///
/// Expects a multipart body with a part named `file`. The original filename,
/// when present, seeds the hosted public id; other parts are ignored.
///
/// # Response
///
/// ```json
/// {"url": "https://images.example.com/site/upload/v1/blog/my-cover.jpg"}
/// ```
///
/// # Errors
///
/// Returns 400 when no `file` part is present, or when uploads are disabled
/// because no image host is configured. Host rejections pass the upstream
/// message through.
pub async fn upload_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Invalid multipart body", json!({ "reason": e.to_string() }))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            AppError::bad_request(
                "Failed to read uploaded file",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let uploaded = state.image_host.upload(bytes.to_vec(), filename).await?;

        metrics::counter!("images_uploaded_total").increment(1);

        return Ok(Json(UploadResponse { url: uploaded.url }));
    }

    Err(AppError::bad_request("No file", json!({ "part": "file" })))
}
