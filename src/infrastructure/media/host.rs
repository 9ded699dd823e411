//! Image host trait and error types.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;

/// Errors that can occur while talking to the image host.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Image uploads are not configured")]
    Disabled,

    /// The host accepted the request but rejected its content. The message is
    /// passed through to the admin client unchanged.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Image host request failed: {0}")]
    Transport(String),

    #[error("Unexpected image host response: {0}")]
    MalformedResponse(String),
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Disabled => {
                AppError::bad_request("Image uploads are not configured", json!({}))
            }
            MediaError::Rejected { status, message } => {
                AppError::upstream(message, json!({ "status": status }))
            }
            MediaError::Transport(msg) | MediaError::MalformedResponse(msg) => {
                AppError::upstream(msg, json!({}))
            }
        }
    }
}

/// Result type for image host operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// A successfully stored image.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Public URL the browser loads the image from.
    pub url: String,
    /// Host-side identifier used for later deletion.
    pub public_id: String,
}

/// Trait for the external image host bridge.
///
/// Implementations must be thread-safe. Deletion is best-effort at the call
/// sites: a failing delete is logged and never blocks the owning row's
/// removal.
///
/// # Implementations
///
/// - [`crate::infrastructure::media::HttpImageHost`] - HTTP client with signed requests
/// - [`crate::infrastructure::media::NullImageHost`] - No-op implementation when unconfigured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads image bytes, returning the public URL and host-side id.
    ///
    /// `filename` is advisory; implementations may derive the stored id from
    /// it but must not require it.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Disabled`] when no host is configured, or
    /// [`MediaError::Rejected`] with the host's own message when it refuses
    /// the file.
    async fn upload(&self, bytes: Vec<u8>, filename: Option<String>)
        -> MediaResult<UploadedImage>;

    /// Deletes a stored image by its host-side id.
    ///
    /// Deleting an id the host no longer knows is not an error.
    async fn delete(&self, public_id: &str) -> MediaResult<()>;

    /// Returns whether a real host is configured.
    ///
    /// Reported by the health endpoint and used to hide upload UI.
    fn is_enabled(&self) -> bool;
}
