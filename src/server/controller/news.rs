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
        news::{NewsDto, NewsInputDto, PaginatedNewsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news::{NewsListQuery, NewsParams, SUMMARY_LIMIT},
        service::news::NewsService,
        state::AppState,
        util::parse::{filter_value, parse_id, parse_page, parse_slug},
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<String>,
    /// Items per page, 1 to 100 (default: 20). Content is omitted at 10 or fewer.
    pub limit: Option<String>,
    pub category: Option<String>,
    /// Exact author name
    pub author: Option<String>,
    /// Case-insensitive match on title or content
    pub search: Option<String>,
    /// `latest`, `oldest`, `title` or `relevance`
    pub sort: Option<String>,
}

/// List news posts.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, filter and sort query values
///
/// # Returns
/// - `200 OK` - Page of posts; `content` is left out when `limit` is 10 or less
/// - `400 Bad Request` - Invalid paging, category or sort value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(NewsListParams),
    responses(
        (status = 200, description = "Page of news posts", body = PaginatedNewsDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 429, description = "Too many search requests", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(params.page.as_deref(), params.limit.as_deref())?;
    let query = NewsListQuery::parse(
        filter_value(params.category.as_deref()),
        params.author.as_deref(),
        params.search.as_deref(),
        params.sort.as_deref(),
    )?;
    let include_content = page.limit > SUMMARY_LIMIT;

    let news = NewsService::new(&state.db).get_paginated(query, page).await?;

    Ok(Json(PaginatedNewsDto {
        success: true,
        pagination: news.pagination_dto(),
        data: news
            .items
            .into_iter()
            .map(|n| n.into_list_item_dto(include_content))
            .collect(),
    }))
}

/// Get a news post by slug.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The post with rendered HTML content
/// - `400 Bad Request` - Invalid slug format
/// - `404 Not Found` - No post with this slug
#[utoipa::path(
    get,
    path = "/api/news/slug/{slug}",
    tag = NEWS_TAG,
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "The news post", body = NewsDto),
        (status = 400, description = "Invalid slug format", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slug = parse_slug(&slug)?;

    let news = NewsService::new(&state.db).get_by_slug(slug).await?;

    Ok(Json(news.into_dto()))
}

/// Get a news post by id.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The post
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - No post with this id
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "The news post", body = NewsDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let news = NewsService::new(&state.db).get_by_id(id).await?;

    Ok(Json(news.into_dto()))
}

/// Create a news post.
///
/// The slug is transliterated from the title and suffixed with `-1`, `-2`, ... when taken.
///
/// # Access Control
/// - `Admin` - Only admins can publish news
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Title, markdown content, category, author and publish date
///
/// # Returns
/// - `201 Created` - The created post
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated admin
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = NewsInputDto,
    responses(
        (status = 201, description = "News created", body = NewsDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewsInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = NewsParams::from_dto(payload)?;

    let news = NewsService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// Update a news post.
///
/// Served for both PUT and PATCH. The slug is regenerated only when the title changes.
///
/// # Access Control
/// - `Admin` - Only admins can edit news
///
/// # Returns
/// - `200 OK` - The updated post
/// - `400 Bad Request` - Invalid id or validation failed
/// - `404 Not Found` - No post with this id
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    request_body = NewsInputDto,
    responses(
        (status = 200, description = "News updated", body = NewsDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<NewsInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let params = NewsParams::from_dto(payload)?;

    let news = NewsService::new(&state.db).update(id, params).await?;

    Ok(Json(news.into_dto()))
}

/// Delete a news post.
///
/// # Access Control
/// - `Admin` - Only admins can delete news
///
/// # Returns
/// - `200 OK` - Post deleted
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - No post with this id
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News id")),
    responses(
        (status = 200, description = "News deleted", body = MessageDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin privileges required", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let id = parse_id(&id)?;
    NewsService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("News deleted successfully")))
}
