//! No-op image host for when no credentials are configured.

use super::host::{ImageHost, MediaError, MediaResult, UploadedImage};
use async_trait::async_trait;
use tracing::debug;

/// An image host that rejects uploads and ignores deletes.
///
/// Used when the media credential set is incomplete. The rest of the site
/// keeps working; only the upload endpoint reports that it is disabled.
///
/// # Use Cases
///
/// - Development environments without image host credentials
/// - Test servers that never touch the network
pub struct NullImageHost;

impl NullImageHost {
    /// Creates a new NullImageHost instance.
    pub fn new() -> Self {
        debug!("Using NullImageHost (uploads disabled)");
        Self
    }
}

impl Default for NullImageHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for NullImageHost {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        _filename: Option<String>,
    ) -> MediaResult<UploadedImage> {
        Err(MediaError::Disabled)
    }

    async fn delete(&self, _public_id: &str) -> MediaResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
