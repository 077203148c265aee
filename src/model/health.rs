use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one health check. Ordered from best to worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    #[default]
    Healthy,
    Warning,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCheckDto {
    pub status: CheckStatus,
    pub response_time_ms: u64,
}

/// Resident memory against the warning threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCheckDto {
    pub status: CheckStatus,
    /// `None` where the platform does not expose process memory.
    pub rss_mb: Option<u64>,
    pub threshold_mb: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiskCheckDto {
    pub status: CheckStatus,
    /// Directory that was checked.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthChecksDto {
    pub database: DatabaseCheckDto,
    pub memory: MemoryCheckDto,
    pub disk: DiskCheckDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    /// Worst status among the checks.
    pub status: CheckStatus,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub response_time_ms: u64,
    pub version: String,
    pub checks: HealthChecksDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoDto {
    pub platform: String,
    pub arch: String,
    pub pid: u32,
    pub cpu_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseDetailDto {
    pub status: CheckStatus,
    pub response_time_ms: u64,
    /// Tables in the connected database, sorted by name.
    pub tables: Vec<String>,
}

/// Health report extended with process and database details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailedHealthDto {
    #[serde(flatten)]
    pub health: HealthDto,
    pub system: SystemInfoDto,
    pub database: DatabaseDetailDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMemoryDto {
    pub rss_bytes: Option<u64>,
    pub virtual_bytes: Option<u64>,
}

/// CPU time consumed by the process, in kernel clock ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CpuUsageDto {
    pub user_ticks: Option<u64>,
    pub system_ticks: Option<u64>,
    pub cores: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDto {
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub memory: ProcessMemoryDto,
    pub cpu: CpuUsageDto,
    /// Clients with an open window across every rate limit preset.
    pub rate_limited_clients: usize,
    pub revoked_tokens: usize,
}

/// Body of the liveness and readiness checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EndpointsDto {
    pub health: String,
    pub api: String,
    pub docs: String,
}

/// Banner served at `/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootDto {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub endpoints: EndpointsDto,
}
