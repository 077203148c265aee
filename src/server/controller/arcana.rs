use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        arcana::{ArcanaDto, ArcanaInputDto, ArcanaPatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::arcana::{ArcanaListQuery, ArcanaParams, ArcanaPatch},
        service::arcana::ArcanaService,
        state::AppState,
        util::parse::{filter_value, parse_id},
    },
};

/// Tag for grouping arcana endpoints in OpenAPI documentation
pub static ARCANA_TAG: &str = "arcana";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArcanaListParams {
    /// `red`, `blue` or `green`
    pub color: Option<String>,
    /// 1 to 3
    pub tier: Option<String>,
    /// `name`, `tier` or `default` (color, tier, name)
    pub sort: Option<String>,
}

/// List arcana.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Every matching arcana as a plain array
/// - `400 Bad Request` - Invalid color, tier or sort
#[utoipa::path(
    get,
    path = "/api/arcana",
    tag = ARCANA_TAG,
    params(ArcanaListParams),
    responses(
        (status = 200, description = "All matching arcana", body = Vec<ArcanaDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_arcana(
    State(state): State<AppState>,
    Query(params): Query<ArcanaListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ArcanaListQuery::parse(
        filter_value(params.color.as_deref()),
        filter_value(params.tier.as_deref()),
        params.sort.as_deref(),
    )?;

    let arcana = ArcanaService::new(&state.db).list(query).await?;

    Ok(Json(
        arcana.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/arcana/{id}",
    tag = ARCANA_TAG,
    params(("id" = i32, Path, description = "Arcana id")),
    responses(
        (status = 200, description = "The arcana", body = ArcanaDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Arcana not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_arcana(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let arcana = ArcanaService::new(&state.db).get_by_id(id).await?;

    Ok(Json(arcana.into_dto()))
}

/// Create an arcana.
///
/// # Access Control
/// - `Admin` - Only admins can create arcana
///
/// # Returns
/// - `201 Created` - The created arcana
/// - `400 Bad Request` - Validation failed
/// - `409 Conflict` - Arcana with this name already exists
#[utoipa::path(
    post,
    path = "/api/arcana",
    tag = ARCANA_TAG,
    request_body = ArcanaInputDto,
    responses(
        (status = 201, description = "Arcana created", body = ArcanaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 409, description = "Arcana name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_arcana(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ArcanaInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = ArcanaParams::from_dto(payload)?;

    let arcana = ArcanaService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(arcana.into_dto())))
}

/// Partially update an arcana.
///
/// Only the fields present in the body are validated and written; everything else keeps
/// its stored value.
///
/// # Access Control
/// - `Admin` - Only admins can update arcana
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Arcana id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The arcana after the update
/// - `400 Bad Request` - Invalid id or a present field failed validation
/// - `404 Not Found` - No arcana with this id
/// - `409 Conflict` - The new name is taken by another arcana
#[utoipa::path(
    patch,
    path = "/api/arcana/{id}",
    tag = ARCANA_TAG,
    params(("id" = i32, Path, description = "Arcana id")),
    request_body = ArcanaPatchDto,
    responses(
        (status = 200, description = "Arcana updated", body = ArcanaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Arcana not found", body = ErrorDto),
        (status = 409, description = "Arcana name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn patch_arcana(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<ArcanaPatchDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let patch = ArcanaPatch::from_dto(payload)?;

    let arcana = ArcanaService::new(&state.db).patch(id, patch).await?;

    Ok(Json(arcana.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/arcana/{id}",
    tag = ARCANA_TAG,
    params(("id" = i32, Path, description = "Arcana id")),
    responses(
        (status = 200, description = "Arcana deleted", body = MessageDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Arcana not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_arcana(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    ArcanaService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Arcana deleted successfully")))
}
