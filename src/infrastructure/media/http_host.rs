//! HTTP image host client with request signing.

use super::host::{ImageHost, MediaError, MediaResult, UploadedImage};
use super::public_id::public_id_from_filename;
use crate::config::MediaConfig;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::Sha256;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

type HmacSha256 = Hmac<Sha256>;

/// Request timeout for upload and destroy calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Signed HTTP client for the external image host.
///
/// Requests authenticate with an HMAC-SHA256 signature over the sorted
/// parameters, keyed by the API secret. The key itself rides along in the
/// clear; only the secret proves authorship.
pub struct HttpImageHost {
    client: reqwest::Client,
    config: MediaConfig,
}

/// Body of a successful upload response.
#[derive(Debug, Deserialize)]
struct UploadResponseBody {
    public_id: String,
    secure_url: String,
}

impl HttpImageHost {
    /// Builds a client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Transport`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: MediaConfig) -> MediaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MediaError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!("✓ Image host configured at {}", config.api_base);

        Ok(Self { client, config })
    }

    /// Signs request parameters with HMAC-SHA256 keyed by the API secret.
    ///
    /// Parameters are sorted by name and joined as `k=v&k=v` before signing,
    /// so both sides serialize identically. Returns a lowercase hex MAC.
    fn sign_params(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let payload = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut mac = HmacSha256::new_from_slice(self.config.api_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn timestamp() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
            .to_string()
    }

    /// Extracts the host's own error message from a failed response.
    ///
    /// Prefers `{"error": {"message": "..."}}` bodies, falls back to the raw
    /// body text, then to a status-code placeholder.
    async fn rejection(response: reqwest::Response) -> MediaError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                v.get("error")?
                    .get("message")?
                    .as_str()
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if text.is_empty() {
                    format!("Image host returned status {}", status)
                } else {
                    text.clone()
                }
            });

        MediaError::Rejected { status, message }
    }
}

#[async_trait]
impl ImageHost for HttpImageHost {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: Option<String>,
    ) -> MediaResult<UploadedImage> {
        let public_id = public_id_from_filename(filename.as_deref());
        let timestamp = Self::timestamp();

        let signature = self.sign_params(&[
            ("folder", &self.config.folder),
            ("public_id", &public_id),
            ("timestamp", &timestamp),
        ]);

        let file_part = Part::bytes(bytes)
            .file_name(filename.unwrap_or_else(|| "upload".to_string()));

        let form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("public_id", public_id)
            .text("signature", signature)
            .part("file", file_part);

        let response = self
            .client
            .post(format!("{}/image/upload", self.config.api_base))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: UploadResponseBody = response
            .json()
            .await
            .map_err(|e| MediaError::MalformedResponse(e.to_string()))?;

        debug!("Uploaded image {} -> {}", body.public_id, body.secure_url);

        Ok(UploadedImage {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> MediaResult<()> {
        let timestamp = Self::timestamp();

        let signature =
            self.sign_params(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let response = self
            .client
            .post(format!("{}/image/destroy", self.config.api_base))
            .form(&[
                ("api_key", self.config.api_key.as_str()),
                ("timestamp", &timestamp),
                ("public_id", public_id),
                ("signature", &signature),
            ])
            .send()
            .await
            .map_err(|e| MediaError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        debug!("Deleted image {}", public_id);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Logs a failed deletion without surfacing it.
///
/// Callers that remove a database row alongside its hosted image must not let
/// a dead image host block the row's removal.
pub async fn delete_best_effort(host: &dyn ImageHost, public_id: &str) {
    if let Err(e) = host.delete(public_id).await {
        warn!("Failed to delete hosted image {}: {}", public_id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaConfig {
        MediaConfig {
            api_base: "https://api.images.example/v1/acct".to_string(),
            public_base: "https://media.images.example/acct".to_string(),
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            folder: "blog".to_string(),
        }
    }

    #[test]
    fn test_sign_params_is_deterministic() {
        let host = HttpImageHost::new(test_config()).unwrap();

        let sig1 = host.sign_params(&[("timestamp", "100"), ("folder", "blog")]);
        let sig2 = host.sign_params(&[("timestamp", "100"), ("folder", "blog")]);

        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
    }

    #[test]
    fn test_sign_params_order_independent() {
        let host = HttpImageHost::new(test_config()).unwrap();

        let sig1 = host.sign_params(&[("folder", "blog"), ("timestamp", "100")]);
        let sig2 = host.sign_params(&[("timestamp", "100"), ("folder", "blog")]);

        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_sign_params_secret_matters() {
        let host1 = HttpImageHost::new(test_config()).unwrap();

        let mut other = test_config();
        other.api_secret = "different-secret".to_string();
        let host2 = HttpImageHost::new(other).unwrap();

        let params = [("timestamp", "100")];
        assert_ne!(host1.sign_params(&params), host2.sign_params(&params));
    }

    #[test]
    fn test_is_enabled() {
        let host = HttpImageHost::new(test_config()).unwrap();
        assert!(host.is_enabled());
    }
}
