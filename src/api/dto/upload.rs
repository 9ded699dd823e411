//! DTO for the image upload endpoint.

use serde::Serialize;

/// Response for `POST /api/admin/upload-image`.
///
/// `url` is the image host's stable delivery URL, ready to be stored as a
/// post's cover image.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
