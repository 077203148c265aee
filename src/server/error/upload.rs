use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,

    /// File sent under a field other than `image`.
    #[error("Unexpected file field.")]
    UnexpectedField,

    #[error("Too many files. Only one file is allowed.")]
    TooManyFiles,

    #[error("File size too large. Maximum size is 5MB.")]
    FileTooLarge,

    #[error("Invalid file type. Only JPEG, PNG, GIF, WebP, and AVIF images are allowed.")]
    InvalidMimeType,

    #[error("Invalid file extension. Only .jpg, .jpeg, .png, .gif, .webp, and .avif files are allowed.")]
    InvalidExtension,

    #[error("File extension does not match file type.")]
    ExtensionMismatch,

    /// Leading bytes do not carry the signature of the declared format.
    #[error("File is not a valid image")]
    InvalidSignature,

    /// Malformed multipart body, or the body exceeded the request limit.
    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Image storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image storage rejected the upload: {0}")]
    Storage(String),

    #[error("Failed to write image to disk: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts upload errors into HTTP responses.
///
/// Client mistakes map to 400, an oversized request body maps to 413 and storage
/// failures map to a sanitized 500.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Multipart(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorDto::new("Request entity too large")),
            )
                .into_response(),
            Self::Request(_) | Self::Storage(_) | Self::Io(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error during upload")),
                )
                    .into_response()
            }
            err => (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response(),
        }
    }
}
