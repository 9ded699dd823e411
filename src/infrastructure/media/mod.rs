//! Bridge to the external image host.
//!
//! Provides an [`ImageHost`] trait with two implementations:
//! - [`HttpImageHost`] - Production client with HMAC-signed requests
//! - [`NullImageHost`] - No-op implementation when credentials are absent
//!
//! [`public_id`] handles the mapping between public image URLs and the
//! host-side ids needed for deletion.

mod host;
mod http_host;
mod null_host;
pub mod public_id;

pub use host::{ImageHost, MediaError, MediaResult, UploadedImage};
pub use http_host::{HttpImageHost, delete_best_effort};
pub use null_host::NullImageHost;

#[cfg(test)]
pub use host::MockImageHost;
