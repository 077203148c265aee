use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected request.
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// `Bearer` prefix present but no token after it.
    #[error("Access denied. Invalid token format.")]
    InvalidTokenFormat,

    /// Token was revoked by a logout before it expired.
    #[error("Access denied. Token has been revoked.")]
    TokenRevoked,

    #[error("Access denied. Token expired.")]
    TokenExpired,

    /// Signature, algorithm or claim check failed.
    #[error("Access denied. Invalid token.")]
    InvalidToken,

    /// Token verified but the user it names no longer exists.
    #[error("Access denied. User not found.")]
    UserNotFound(i32),

    /// User lacks the required role. Results in 403 Forbidden.
    #[error("Access denied. Admin privileges required.")]
    AccessDenied(i32),

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailExists,

    /// Registration turned off with `ALLOW_REGISTRATION=false`.
    #[error("Registration is disabled")]
    RegistrationDisabled,

    /// Failed to sign a token.
    #[error("Failed to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// Failed to hash or verify a password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Hashing task panicked or was cancelled.
    #[error("Password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

/// Converts authentication errors into HTTP responses.
///
/// - Token and credential failures → 401 Unauthorized
/// - `AccessDenied` / `RegistrationDisabled` → 403 Forbidden
/// - `EmailExists` → 400 Bad Request
/// - Signing and hashing failures → 500 Internal Server Error, logged server-side
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingToken
            | Self::InvalidTokenFormat
            | Self::TokenRevoked
            | Self::TokenExpired
            | Self::InvalidToken
            | Self::UserNotFound(_)
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AccessDenied(user_id) => {
                tracing::debug!("User {} denied access to an admin route", user_id);
                StatusCode::FORBIDDEN
            }
            Self::RegistrationDisabled => StatusCode::FORBIDDEN,
            Self::EmailExists => StatusCode::BAD_REQUEST,
            Self::TokenCreation(_) | Self::PasswordHash(_) | Self::HashTask(_) => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response();
            }
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
