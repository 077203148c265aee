//! Local disk storage, served back under `/uploads`.

use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use crate::server::error::upload::UploadError;

use super::{StoredImage, ValidatedImage};

/// URL prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the image as `<millis>-<random hex>.<ext>` inside the upload directory.
    ///
    /// # Returns
    /// - `Ok(StoredImage)` - File name as public id and its `/uploads` URL
    /// - `Err(UploadError::Io)` - Directory could not be created or the file not written
    pub async fn store(&self, image: ValidatedImage) -> Result<StoredImage, UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = unique_file_name(&image.extension);
        let bytes = image.bytes.len() as u64;
        tokio::fs::write(self.dir.join(&file_name), &image.bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", file_name, bytes);

        Ok(StoredImage {
            secure_url: format!("{}/{}", PUBLIC_PREFIX, file_name),
            public_id: file_name,
            width: None,
            height: None,
            format: image.extension,
            bytes,
        })
    }

    /// Deletes regular files whose modification time is older than `max_age`.
    ///
    /// A missing directory counts as empty.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of files removed
    /// - `Err(std::io::Error)` - Directory could not be read
    pub async fn remove_older_than(&self, max_age: Duration) -> std::io::Result<usize> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let now = SystemTime::now();
        let mut removed = 0;
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let age = metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();
            if age <= max_age {
                continue;
            }

            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Failed to remove {}: {}", entry.path().display(), e),
            }
        }

        Ok(removed)
    }
}

fn unique_file_name(extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: [u8; 16] = rand::random();
    format!("{}-{}.{}", millis, hex::encode(random), extension)
}
