use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        meta::{MetaDto, MetaInputDto, MetaPatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::meta::{MetaParams, MetaPatch},
        service::meta::MetaService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping meta endpoints in OpenAPI documentation
pub static META_TAG: &str = "meta";

/// List meta snapshots, newest first.
///
/// Each snapshot carries its heroes as summaries. Heroes deleted since the snapshot was
/// taken are left out.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/meta",
    tag = META_TAG,
    responses(
        (status = 200, description = "All meta snapshots", body = Vec<MetaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_meta(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let metas = MetaService::new(&state.db).list().await?;

    Ok(Json(metas.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()))
}

/// Create a meta snapshot.
///
/// # Access Control
/// - `Admin` - Only admins can create meta snapshots
///
/// # Returns
/// - `201 Created` - The snapshot with populated heroes
/// - `400 Bad Request` - Missing patch or unknown hero ids
#[utoipa::path(
    post,
    path = "/api/meta",
    tag = META_TAG,
    request_body = MetaInputDto,
    responses(
        (status = 201, description = "Meta created", body = MetaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_meta(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MetaInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = MetaParams::from_dto(payload)?;

    let meta = MetaService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(meta.into_dto())))
}

/// Partially update a meta snapshot.
///
/// # Access Control
/// - `Admin` - Only admins can update meta snapshots
#[utoipa::path(
    patch,
    path = "/api/meta/{id}",
    tag = META_TAG,
    params(("id" = i32, Path, description = "Meta id")),
    request_body = MetaPatchDto,
    responses(
        (status = 200, description = "Meta updated", body = MetaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Meta not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn patch_meta(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<MetaPatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let patch = MetaPatch::from_dto(payload)?;

    let meta = MetaService::new(&state.db).patch(id, patch).await?;

    Ok(Json(meta.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/meta/{id}",
    tag = META_TAG,
    params(("id" = i32, Path, description = "Meta id")),
    responses(
        (status = 200, description = "Meta deleted", body = MessageDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Meta not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_meta(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    MetaService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Meta deleted successfully")))
}
