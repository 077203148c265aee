use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    middleware::rate_limit::RateLimits,
    service::{token::TokenService, upload::ImageStore},
    state::AppState,
};

/// Every hour, on the hour.
const HOURLY: &str = "0 0 * * * *";

/// Every day at 03:00.
const NIGHTLY: &str = "0 0 3 * * *";

/// Starts the maintenance scheduler.
///
/// Two jobs are registered:
/// - Hourly: purge revoked tokens that have expired and drop idle rate limiter keys
/// - Nightly: delete locally stored uploads older than the retention window, only when
///   the local image store is active
///
/// # Arguments
/// - `state` - Application state holding the token service, limiters and image store
/// - `retention_days` - Age after which local uploads are deleted
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler started
pub async fn start_scheduler(state: &AppState, retention_days: u32) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let tokens = state.tokens.clone();
    let limits = state.rate_limits.clone();
    let hourly = Job::new_async(HOURLY, move |_uuid, _lock| {
        let tokens = tokens.clone();
        let limits = limits.clone();

        Box::pin(async move {
            purge_expired_state(&tokens, &limits).await;
        })
    })?;
    scheduler.add(hourly).await?;

    if let ImageStore::Local(store) = &state.images {
        let store = store.clone();
        let max_age = Duration::from_secs(u64::from(retention_days) * 24 * 60 * 60);
        let nightly = Job::new_async(NIGHTLY, move |_uuid, _lock| {
            let store = store.clone();

            Box::pin(async move {
                match store.remove_older_than(max_age).await {
                    Ok(0) => {}
                    Ok(removed) => tracing::info!("Removed {} expired uploads", removed),
                    Err(e) => tracing::error!("Error cleaning up uploads: {}", e),
                }
            })
        })?;
        scheduler.add(nightly).await?;
    }

    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(scheduler)
}

async fn purge_expired_state(tokens: &TokenService, limits: &RateLimits) {
    let purged = tokens.purge_expired().await;
    let tracked = limits.purge_expired();

    tracing::debug!(
        "Purged {} revoked tokens, {} rate limit keys still tracked",
        purged,
        tracked
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::Config;
    use chrono::Utc;

    #[tokio::test]
    async fn purges_only_expired_revocations() {
        let config = Config::for_test();
        let tokens = TokenService::new(&config.jwt_secret, config.jwt_expires_in);
        let limits = RateLimits::from_config(&config.rate_limits).unwrap();
        let now = Utc::now().timestamp();

        tokens.revoke("expired", now - 10).await;
        tokens.revoke("live", now + 3600).await;

        purge_expired_state(&tokens, &limits).await;

        assert!(!tokens.is_revoked("expired").await);
        assert!(tokens.is_revoked("live").await);
    }
}
