use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{CredentialsDto, LoginResponseDto, ProfileResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::Credentials,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// # Access Control
/// - Public, behind the auth rate limiter
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Bearer token and the user
/// - `400 Bad Request` - Email or password fails validation
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `429 Too Many Requests` - Too many attempts from this client
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many authentication attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let credentials = Credentials::from_dto(payload)?;

    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .login(credentials)
        .await?;

    Ok(Json(LoginResponseDto {
        success: true,
        token,
        user: user.into_auth_dto(),
    }))
}

/// Register an admin account.
///
/// # Access Control
/// - Public, behind the auth rate limiter. Disabled with `ALLOW_REGISTRATION=false`.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Validation failed or email already registered
/// - `403 Forbidden` - Registration is disabled
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Validation failed or email exists", body = ErrorDto),
        (status = 403, description = "Registration is disabled", body = ErrorDto),
        (status = 429, description = "Too many authentication attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let credentials = Credentials::from_dto(payload)?;

    AuthService::new(&state.db, &state.tokens)
        .register(credentials, state.bcrypt_cost, state.allow_registration)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Admin account created successfully!")),
    ))
}

/// Get the authenticated admin's profile.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = ProfileResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    Ok(Json(ProfileResponseDto {
        success: true,
        user: authenticated.user.into_profile_dto(),
    }))
}

/// Log out by revoking the presented token.
///
/// The token stays rejected until its own expiry.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&authenticated.token, &authenticated.claims)
        .await;

    Ok(Json(MessageDto::new("Logged out successfully")))
}
