use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, upload::UploadResponseDto},
    server::{
        error::{upload::UploadError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::upload::{IncomingFile, FILE_FIELD, MAX_FILE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Upload one image.
///
/// The file must be sent in the multipart field `image`. It is checked by MIME type,
/// extension and magic bytes before it is stored on Cloudinary or the local disk.
///
/// # Access Control
/// - `Admin` - Only admins can upload, behind the upload rate limiter
///
/// # Arguments
/// - `state` - Application state containing the image store
/// - `headers` - Request headers carrying the bearer token
/// - `multipart` - Multipart body with one file
///
/// # Returns
/// - `200 OK` - Stored image URL and metadata
/// - `400 Bad Request` - Missing, extra, oversized or invalid file
/// - `413 Payload Too Large` - Request body over 10 MB
/// - `500 Internal Server Error` - Storage backend failure
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Image file in field `image`"),
    responses(
        (status = 200, description = "Image uploaded", body = UploadResponseDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 413, description = "Request entity too large", body = ErrorDto),
        (status = 429, description = "Too many file uploads", body = ErrorDto),
        (status = 500, description = "Internal server error during upload", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut multipart = multipart.map_err(|_| UploadError::NoFile)?;
    let file = read_single_file(&mut multipart).await?;

    let image = file.validate()?;
    let stored = state.images.store(image).await?;
    tracing::info!("Uploaded image {}", stored.public_id);

    Ok(Json(UploadResponseDto {
        success: true,
        message: "File uploaded successfully".to_string(),
        image_url: stored.secure_url.clone(),
        data: stored.into_dto(),
    }))
}

/// Reads exactly one file from the `image` field, chunk by chunk.
///
/// Text fields are skipped. Reading stops as soon as the file grows past the size limit.
async fn read_single_file(multipart: &mut Multipart) -> Result<IncomingFile, UploadError> {
    let mut file = None;

    while let Some(mut field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if field.name() != Some(FILE_FIELD) {
            return Err(UploadError::UnexpectedField);
        }
        if file.is_some() {
            return Err(UploadError::TooManyFiles);
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await? {
            if bytes.len() + chunk.len() > MAX_FILE_SIZE {
                return Err(UploadError::FileTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        file = Some(IncomingFile {
            file_name,
            content_type,
            bytes,
        });
    }

    file.ok_or(UploadError::NoFile)
}
