//! Image upload validation and storage.
//!
//! An upload is checked in four steps before it is stored: declared MIME type, file
//! extension, agreement between the two, and the magic bytes of the declared format.
//! Accepted images go to Cloudinary when credentials are configured and to the local
//! upload directory otherwise.

pub mod cloudinary;
pub mod local;

use std::path::Path;

use crate::{
    model::upload::UploadedImageDto,
    server::{config::Config, error::upload::UploadError},
};

use self::{cloudinary::CloudinaryStore, local::LocalStore};

/// Largest accepted file, in bytes.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Multipart field that must carry the file.
pub const FILE_FIELD: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Avif,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            "image/avif" => Some(Self::Avif),
            _ => None,
        }
    }

    /// Extensions accepted for this format, without the dot. The first is canonical.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
            Self::Webp => &["webp"],
            Self::Avif => &["avif"],
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Avif => "image/avif",
        }
    }

    /// Checks the leading bytes of a file against this format's signature.
    pub fn matches_signature(self, bytes: &[u8]) -> bool {
        match self {
            Self::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            Self::Png => bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
            Self::Gif => bytes.starts_with(b"GIF8"),
            Self::Webp => bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
            Self::Avif => {
                bytes.len() >= 12
                    && &bytes[4..8] == b"ftyp"
                    && matches!(&bytes[8..12], b"avif" | b"avis")
            }
        }
    }
}

/// File part read from a multipart request.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// File that passed every validation step.
#[derive(Debug, Clone)]
pub struct ValidatedImage {
    pub format: ImageFormat,
    /// Lowercased extension from the original file name.
    pub extension: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    /// Runs the MIME, extension and signature checks in order.
    ///
    /// # Returns
    /// - `Ok(ValidatedImage)` - File is an accepted image
    /// - `Err(UploadError)` - The first check that failed
    pub fn validate(self) -> Result<ValidatedImage, UploadError> {
        let format = ImageFormat::from_mime(&self.content_type).ok_or(UploadError::InvalidMimeType)?;

        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or(UploadError::InvalidExtension)?;
        let known = [
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::Gif,
            ImageFormat::Webp,
            ImageFormat::Avif,
        ]
        .iter()
        .any(|f| f.extensions().contains(&extension.as_str()));
        if !known {
            return Err(UploadError::InvalidExtension);
        }
        if !format.extensions().contains(&extension.as_str()) {
            return Err(UploadError::ExtensionMismatch);
        }

        if !format.matches_signature(&self.bytes) {
            tracing::warn!(
                "Rejected upload {} with a signature that does not match {}",
                self.file_name,
                format.mime()
            );
            return Err(UploadError::InvalidSignature);
        }

        Ok(ValidatedImage {
            format,
            extension,
            file_name: self.file_name,
            bytes: self.bytes,
        })
    }
}

/// Metadata of an image after it has been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub public_id: String,
    pub secure_url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: String,
    pub bytes: u64,
}

impl StoredImage {
    pub fn into_dto(self) -> UploadedImageDto {
        UploadedImageDto {
            public_id: self.public_id,
            secure_url: self.secure_url,
            width: self.width,
            height: self.height,
            format: self.format,
            bytes: self.bytes,
        }
    }
}

/// Storage backend chosen at startup.
#[derive(Clone)]
pub enum ImageStore {
    Cloudinary(CloudinaryStore),
    Local(LocalStore),
}

impl ImageStore {
    /// Uses Cloudinary when all credentials are configured, local disk otherwise.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        match &config.cloudinary {
            Some(cloudinary) => {
                tracing::info!("Storing uploads on Cloudinary in folder {}", cloudinary.folder);
                Self::Cloudinary(CloudinaryStore::new(http_client, cloudinary.clone()))
            }
            None => {
                tracing::info!("Storing uploads in {}", config.upload_dir.display());
                Self::Local(LocalStore::new(config.upload_dir.clone()))
            }
        }
    }

    pub async fn store(&self, image: ValidatedImage) -> Result<StoredImage, UploadError> {
        match self {
            Self::Cloudinary(store) => store.store(image).await,
            Self::Local(store) => store.store(image).await,
        }
    }

    /// Directory served at `/uploads` when the local store is active.
    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            Self::Cloudinary(_) => None,
            Self::Local(store) => Some(store.dir()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    fn file(name: &str, mime: &str, bytes: &[u8]) -> IncomingFile {
        IncomingFile {
            file_name: name.to_string(),
            content_type: mime.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    /// Tests a well-formed PNG.
    ///
    /// Expected: Ok with the PNG format and lowercased extension
    #[test]
    fn accepts_matching_png() {
        let image = file("Hero.PNG", "image/png", PNG).validate().unwrap();

        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.extension, "png");
    }

    /// Tests that a Windows executable renamed to .jpg fails the signature check.
    ///
    /// Expected: Err(InvalidSignature)
    #[test]
    fn rejects_renamed_executable() {
        let exe = b"MZ\x90\x00\x03\x00\x00\x00\x04\x00\x00\x00";

        let result = file("avatar.jpg", "image/jpeg", exe).validate();

        assert!(matches!(result, Err(UploadError::InvalidSignature)));
    }

    /// Tests each validation step in order.
    ///
    /// Expected: MIME, extension and mismatch errors for the respective inputs
    #[test]
    fn reports_first_failing_step() {
        assert!(matches!(
            file("a.png", "application/pdf", PNG).validate(),
            Err(UploadError::InvalidMimeType)
        ));
        assert!(matches!(
            file("a.bmp", "image/png", PNG).validate(),
            Err(UploadError::InvalidExtension)
        ));
        assert!(matches!(
            file("noext", "image/png", PNG).validate(),
            Err(UploadError::InvalidExtension)
        ));
        assert!(matches!(
            file("a.png", "image/jpeg", JPEG).validate(),
            Err(UploadError::ExtensionMismatch)
        ));
    }

    /// Tests that image/jpg accepts both JPEG extensions.
    ///
    /// Expected: Ok for .jpg and .jpeg
    #[test]
    fn jpeg_accepts_both_extensions() {
        assert!(file("a.jpg", "image/jpg", JPEG).validate().is_ok());
        assert!(file("a.jpeg", "image/jpeg", JPEG).validate().is_ok());
    }

    /// Tests the container formats whose signature is not a plain prefix.
    ///
    /// Expected: WebP needs RIFF and WEBP, AVIF needs an avif or avis brand
    #[test]
    fn checks_container_signatures() {
        assert!(ImageFormat::Webp.matches_signature(b"RIFF\x24\x00\x00\x00WEBPVP8 "));
        assert!(!ImageFormat::Webp.matches_signature(b"RIFF\x24\x00\x00\x00WAVEfmt "));
        assert!(ImageFormat::Avif.matches_signature(b"\x00\x00\x00\x1cftypavif"));
        assert!(ImageFormat::Avif.matches_signature(b"\x00\x00\x00\x1cftypavis"));
        assert!(!ImageFormat::Avif.matches_signature(b"\x00\x00\x00\x1cftypheic"));
        assert!(!ImageFormat::Gif.matches_signature(b"GIF"));
    }
}
