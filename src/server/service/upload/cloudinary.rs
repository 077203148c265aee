//! Signed uploads to the Cloudinary image API.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::server::{config::CloudinaryConfig, error::upload::UploadError};

use super::{StoredImage, ValidatedImage};

/// Resize to at most 1200x1200, automatic quality and automatic delivery format.
pub const TRANSFORMATION: &str = "c_limit,h_1200,w_1200/q_auto:good/f_auto";

#[derive(Clone)]
pub struct CloudinaryStore {
    http_client: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    width: Option<u32>,
    height: Option<u32>,
    format: String,
    bytes: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryStore {
    pub fn new(http_client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        )
    }

    /// Uploads the image into the configured folder with the size and quality transformation.
    ///
    /// # Returns
    /// - `Ok(StoredImage)` - Metadata reported by Cloudinary
    /// - `Err(UploadError::Request)` - Request could not be sent or the body was not JSON
    /// - `Err(UploadError::Storage)` - Cloudinary rejected the upload
    pub async fn store(&self, image: ValidatedImage) -> Result<StoredImage, UploadError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[
                ("folder", self.config.folder.as_str()),
                ("timestamp", timestamp.as_str()),
                ("transformation", TRANSFORMATION),
            ],
            &self.config.api_secret,
        );

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(image.format.mime())?;
        let form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("transformation", TRANSFORMATION)
            .text("signature", signature);

        let response = self
            .http_client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("Cloudinary responded with {}", status),
            };
            return Err(UploadError::Storage(message));
        }

        let uploaded: UploadResponse = response.json().await?;
        tracing::debug!("Uploaded {} to Cloudinary", uploaded.public_id);

        Ok(StoredImage {
            public_id: uploaded.public_id,
            secure_url: uploaded.secure_url,
            width: uploaded.width,
            height: uploaded.height,
            format: uploaded.format,
            bytes: uploaded.bytes,
        })
    }
}

/// Computes the API signature: parameters sorted by name, joined as `k=v&k=v`, followed by
/// the secret, hashed with SHA-1 and hex encoded.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
