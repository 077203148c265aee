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
        hero::{HeroDto, HeroInputDto, PaginatedHeroesDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hero::{HeroListQuery, HeroParams},
        service::hero::HeroService,
        state::AppState,
        util::parse::{filter_value, parse_id, parse_page, parse_slug},
    },
};

/// Tag for grouping hero endpoints in OpenAPI documentation
pub static HERO_TAG: &str = "hero";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HeroListParams {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<String>,
    /// Items per page, 1 to 100 (default: 20)
    pub limit: Option<String>,
    /// Case-insensitive match on name or title
    pub search: Option<String>,
    pub role: Option<String>,
    pub lane: Option<String>,
    pub meta_tier: Option<String>,
    /// `name`, `winRate`, `pickRate` or `metaTier`
    pub sort: Option<String>,
}

/// List heroes.
///
/// Returns a page of hero summaries filtered by role, lane, meta tier and search text.
/// A filter value of `all` is ignored.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, filter and sort query values
///
/// # Returns
/// - `200 OK` - Page of hero summaries with pagination info
/// - `400 Bad Request` - Invalid paging, filter or sort value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/heroes",
    tag = HERO_TAG,
    params(HeroListParams),
    responses(
        (status = 200, description = "Page of heroes", body = PaginatedHeroesDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 429, description = "Too many search requests", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_heroes(
    State(state): State<AppState>,
    Query(params): Query<HeroListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(params.page.as_deref(), params.limit.as_deref())?;
    let query = HeroListQuery::parse(
        params.search.as_deref(),
        filter_value(params.role.as_deref()),
        filter_value(params.lane.as_deref()),
        filter_value(params.meta_tier.as_deref()),
        params.sort.as_deref(),
    )?;

    let heroes = HeroService::new(&state.db).get_paginated(query, page).await?;

    Ok(Json(PaginatedHeroesDto {
        success: true,
        pagination: heroes.pagination_dto(),
        data: heroes.items.into_iter().map(|h| h.into_dto()).collect(),
    }))
}

/// Get a hero by slug.
///
/// Allies and counters are populated; references to deleted heroes are left out.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The hero
/// - `400 Bad Request` - Slug is not lowercase letters, digits and dashes
/// - `404 Not Found` - No hero with this slug
#[utoipa::path(
    get,
    path = "/api/heroes/slug/{slug}",
    tag = HERO_TAG,
    params(("slug" = String, Path, description = "Hero slug")),
    responses(
        (status = 200, description = "The hero", body = HeroDto),
        (status = 400, description = "Invalid slug format", body = ErrorDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hero_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slug = parse_slug(&slug)?;

    let hero = HeroService::new(&state.db).get_by_slug(slug).await?;

    Ok(Json(hero.into_dto()))
}

/// Get a hero by id.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The hero with populated matchups
/// - `400 Bad Request` - Id is not a positive integer
/// - `404 Not Found` - No hero with this id
#[utoipa::path(
    get,
    path = "/api/heroes/{id}",
    tag = HERO_TAG,
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "The hero", body = HeroDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let hero = HeroService::new(&state.db).get_by_id(id).await?;

    Ok(Json(hero.into_dto()))
}

/// Create a hero.
///
/// The slug is derived from the name. Every validation failure is reported in `details`.
///
/// # Access Control
/// - `Admin` - Only admins can create heroes
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Hero fields, skills, skins and matchups
///
/// # Returns
/// - `201 Created` - The created hero
/// - `400 Bad Request` - Validation failed or a matchup points at a missing hero
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated admin
/// - `409 Conflict` - A hero with this name already exists
#[utoipa::path(
    post,
    path = "/api/heroes",
    tag = HERO_TAG,
    request_body = HeroInputDto,
    responses(
        (status = 201, description = "Hero created", body = HeroDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 409, description = "Hero name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_hero(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<HeroInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = HeroParams::from_dto(payload)?;

    let hero = HeroService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(hero.into_dto())))
}

/// Replace a hero.
///
/// Served for both PUT and PATCH; the body is validated as a complete hero and the
/// matchups are replaced.
///
/// # Access Control
/// - `Admin` - Only admins can update heroes
///
/// # Returns
/// - `200 OK` - The updated hero
/// - `400 Bad Request` - Invalid id, validation failed or bad matchup reference
/// - `404 Not Found` - No hero with this id
/// - `409 Conflict` - Another hero already has this name
#[utoipa::path(
    put,
    path = "/api/heroes/{id}",
    tag = HERO_TAG,
    params(("id" = i32, Path, description = "Hero id")),
    request_body = HeroInputDto,
    responses(
        (status = 200, description = "Hero updated", body = HeroDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 409, description = "Hero name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_hero(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<HeroInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let params = HeroParams::from_dto(payload)?;

    let hero = HeroService::new(&state.db).update(id, params).await?;

    Ok(Json(hero.into_dto()))
}

/// Delete a hero.
///
/// Every ally or counter entry on other heroes that points at it is removed too.
///
/// # Access Control
/// - `Admin` - Only admins can delete heroes
///
/// # Returns
/// - `200 OK` - Hero deleted
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - No hero with this id
#[utoipa::path(
    delete,
    path = "/api/heroes/{id}",
    tag = HERO_TAG,
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero deleted", body = MessageDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    HeroService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Hero deleted successfully")))
}
