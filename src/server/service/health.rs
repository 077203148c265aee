//! Health report assembly.
//!
//! The overall status is the worst of the database, memory and disk checks. `warning`
//! still counts as serving; only `unhealthy` turns the report into a 503.

use std::{
    io::ErrorKind,
    path::Path,
    time::{Duration, Instant},
};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::health::{
        CheckStatus, CpuUsageDto, DatabaseCheckDto, DatabaseDetailDto, DetailedHealthDto,
        DiskCheckDto, HealthChecksDto, HealthDto, MemoryCheckDto, MetricsDto, ProcessMemoryDto,
        SystemInfoDto,
    },
    server::{
        data::health::HealthRepository,
        middleware::rate_limit::RateLimits,
        service::token::TokenService,
        util::process::ProcessStats,
    },
};

pub const API_VERSION: &str = "1.0.0";

/// Resident memory above which the memory check reports a warning.
pub const MEMORY_WARNING_MB: u64 = 512;

const BYTES_PER_MB: u64 = 1024 * 1024;

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
    /// Directory whose availability the disk check reports.
    disk_path: &'a Path,
    started_at: Instant,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection, disk_path: &'a Path, started_at: Instant) -> Self {
        Self {
            db,
            disk_path,
            started_at,
        }
    }

    /// Runs every check and rolls them up into one report.
    pub async fn report(&self) -> HealthDto {
        let started = Instant::now();

        let database = self.check_database().await;
        let memory = memory_check(ProcessStats::read().await.rss_bytes);
        let disk = self.check_disk().await;

        HealthDto {
            status: database.status.max(memory.status).max(disk.status),
            timestamp: Utc::now(),
            uptime_seconds: self.uptime().as_secs(),
            response_time_ms: started.elapsed().as_millis() as u64,
            version: API_VERSION.to_string(),
            checks: HealthChecksDto {
                database,
                memory,
                disk,
            },
        }
    }

    /// The health report plus process information and the database's table list.
    pub async fn detailed(&self) -> DetailedHealthDto {
        let health = self.report().await;

        let tables = match HealthRepository::new(self.db).table_names().await {
            Ok(tables) => tables,
            Err(e) => {
                tracing::warn!("Failed to list database tables: {}", e);
                Vec::new()
            }
        };

        DetailedHealthDto {
            system: SystemInfoDto {
                platform: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
                pid: std::process::id(),
                cpu_count: cpu_count(),
            },
            database: DatabaseDetailDto {
                status: health.checks.database.status,
                response_time_ms: health.checks.database.response_time_ms,
                tables,
            },
            health,
        }
    }

    /// Process resource usage and in-memory bookkeeping sizes.
    pub async fn metrics(&self, limits: &RateLimits, tokens: &TokenService) -> MetricsDto {
        let stats = ProcessStats::read().await;

        MetricsDto {
            timestamp: Utc::now(),
            uptime_seconds: self.uptime().as_secs(),
            memory: ProcessMemoryDto {
                rss_bytes: stats.rss_bytes,
                virtual_bytes: stats.virtual_bytes,
            },
            cpu: CpuUsageDto {
                user_ticks: stats.user_ticks,
                system_ticks: stats.system_ticks,
                cores: cpu_count(),
            },
            rate_limited_clients: limits.tracked_clients(),
            revoked_tokens: tokens.revoked_count().await,
        }
    }

    /// Pings the database.
    pub async fn check_database(&self) -> DatabaseCheckDto {
        let started = Instant::now();
        let status = match HealthRepository::new(self.db).ping().await {
            Ok(()) => CheckStatus::Healthy,
            Err(e) => {
                tracing::error!("Health check database ping failed: {}", e);
                CheckStatus::Unhealthy
            }
        };

        DatabaseCheckDto {
            status,
            response_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// A missing directory is healthy because uploads create it on demand.
    async fn check_disk(&self) -> DiskCheckDto {
        let status = match tokio::fs::metadata(self.disk_path).await {
            Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => CheckStatus::Healthy,
            Ok(_) => CheckStatus::Warning,
            Err(e) if e.kind() == ErrorKind::NotFound => CheckStatus::Healthy,
            Err(e) => {
                tracing::warn!("Disk check failed for {}: {}", self.disk_path.display(), e);
                CheckStatus::Unhealthy
            }
        };

        DiskCheckDto {
            status,
            path: self.disk_path.display().to_string(),
        }
    }

    fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

fn memory_check(rss_bytes: Option<u64>) -> MemoryCheckDto {
    let rss_mb = rss_bytes.map(|bytes| bytes / BYTES_PER_MB);
    let status = match rss_mb {
        Some(mb) if mb > MEMORY_WARNING_MB => CheckStatus::Warning,
        _ => CheckStatus::Healthy,
    };

    MemoryCheckDto {
        status,
        rss_mb,
        threshold_mb: MEMORY_WARNING_MB,
    }
}

fn cpu_count() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
