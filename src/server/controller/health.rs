use std::path::Path;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        health::{
            CheckStatus, DetailedHealthDto, EndpointsDto, HealthDto, MetricsDto, StatusDto, RootDto,
        },
    },
    server::{
        service::health::{HealthService, API_VERSION},
        state::AppState,
    },
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Checked by the disk check when uploads go to Cloudinary.
const WORKING_DIR: &str = ".";

fn health_service(state: &AppState) -> HealthService<'_> {
    let disk_path = state
        .images
        .local_dir()
        .unwrap_or_else(|| Path::new(WORKING_DIR));

    HealthService::new(&state.db, disk_path, state.started_at)
}

fn status_code(status: CheckStatus) -> StatusCode {
    match status {
        CheckStatus::Healthy | CheckStatus::Warning => StatusCode::OK,
        CheckStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Health report covering the database, process memory and the upload disk.
///
/// # Returns
/// - `200 OK` - Every check is healthy, or the worst one is a warning
/// - `503 Service Unavailable` - A check is unhealthy
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Healthy or warning", body = HealthDto),
        (status = 503, description = "Unhealthy", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = health_service(&state).report().await;

    (status_code(report.status), Json(report))
}

/// Health report with system information and the database table list.
///
/// # Returns
/// - `200 OK` - Every check is healthy, or the worst one is a warning
/// - `503 Service Unavailable` - A check is unhealthy
#[utoipa::path(
    get,
    path = "/health/detailed",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Healthy or warning", body = DetailedHealthDto),
        (status = 503, description = "Unhealthy", body = DetailedHealthDto)
    ),
)]
pub async fn detailed(State(state): State<AppState>) -> impl IntoResponse {
    let report = health_service(&state).detailed().await;

    (status_code(report.health.status), Json(report))
}

/// Process uptime, memory, CPU time and in-memory state sizes.
#[utoipa::path(
    get,
    path = "/health/metrics",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Process metrics", body = MetricsDto)),
)]
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(
        health_service(&state)
            .metrics(&state.rate_limits, &state.tokens)
            .await,
    )
}

/// Liveness check; answers as long as the process serves requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Alive", body = StatusDto)),
)]
pub async fn live() -> impl IntoResponse {
    Json(StatusDto {
        status: "alive".to_string(),
    })
}

/// Readiness check; ready once the database answers.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Ready", body = StatusDto),
        (status = 503, description = "Not ready", body = StatusDto)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let database = health_service(&state).check_database().await;

    match database.status {
        CheckStatus::Unhealthy => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusDto {
                status: "not ready".to_string(),
            }),
        ),
        _ => (
            StatusCode::OK,
            Json(StatusDto {
                status: "ready".to_string(),
            }),
        ),
    }
}

/// Server banner.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Server banner", body = RootDto)),
)]
pub async fn root() -> impl IntoResponse {
    Json(RootDto {
        success: true,
        message: "BlogHok API Server".to_string(),
        version: API_VERSION.to_string(),
        status: "running".to_string(),
        timestamp: Utc::now(),
        endpoints: EndpointsDto {
            health: "/health".to_string(),
            api: "/api".to_string(),
            docs: "/api/docs".to_string(),
        },
    })
}

/// Fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!("Route not found: {} {}", method, uri.path());

    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Route not found")))
}
