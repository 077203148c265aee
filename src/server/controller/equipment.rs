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
        equipment::{EquipmentDto, EquipmentInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::equipment::{EquipmentFilter, EquipmentParams},
        service::equipment::EquipmentService,
        state::AppState,
        util::parse::{filter_value, parse_id},
    },
};

/// Tag for grouping equipment endpoints in OpenAPI documentation
pub static EQUIPMENT_TAG: &str = "equipment";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentListParams {
    pub category: Option<String>,
    pub tier: Option<String>,
}

/// List equipment sorted by name.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    params(EquipmentListParams),
    responses(
        (status = 200, description = "All matching equipment", body = Vec<EquipmentDto>),
        (status = 400, description = "Invalid category or tier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    Query(params): Query<EquipmentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = EquipmentFilter::parse(
        filter_value(params.category.as_deref()),
        filter_value(params.tier.as_deref()),
    )?;

    let items = EquipmentService::new(&state.db).list(filter).await?;

    Ok(Json(
        items.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "The equipment", body = EquipmentDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let equipment = EquipmentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(equipment.into_dto()))
}

/// Create equipment.
///
/// # Access Control
/// - `Admin` - Only admins can create equipment
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Equipment fields with build path and builds-into references
///
/// # Returns
/// - `201 Created` - The created equipment
/// - `400 Bad Request` - Validation failed or a build reference is missing
/// - `409 Conflict` - Equipment with this name already exists
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    request_body = EquipmentInputDto,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 409, description = "Equipment name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<EquipmentInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = EquipmentParams::from_dto(payload)?;

    let equipment = EquipmentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(equipment.into_dto())))
}

/// Replace equipment and its build links.
///
/// # Access Control
/// - `Admin` - Only admins can update equipment
#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment id")),
    request_body = EquipmentInputDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 409, description = "Equipment name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<EquipmentInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let params = EquipmentParams::from_dto(payload)?;

    let equipment = EquipmentService::new(&state.db).update(id, params).await?;

    Ok(Json(equipment.into_dto()))
}

/// Delete equipment and every build link pointing at it.
///
/// # Access Control
/// - `Admin` - Only admins can delete equipment
#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    EquipmentService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Equipment deleted successfully")))
}
