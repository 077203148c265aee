//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds:
//! - Database connection pool
//! - Token service with the revoked-token list
//! - Image store backing the upload endpoint
//! - Keyed rate limiters for each preset

use sea_orm::DatabaseConnection;
use std::time::Instant;

use crate::server::{
    config::Config, error::AppError, middleware::rate_limit::RateLimits,
    service::{token::TokenService, upload::ImageStore},
};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the connection is a pool handle and the token service,
/// image store and rate limiters keep their shared data behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues, verifies and revokes bearer tokens.
    pub tokens: TokenService,

    /// Cloudinary or local-disk storage for uploaded images.
    pub images: ImageStore,

    /// Rate limiters applied by the router per route group.
    pub rate_limits: RateLimits,

    /// bcrypt work factor used when registering users.
    pub bcrypt_cost: u32,

    /// Whether `POST /api/auth/register` accepts new accounts.
    pub allow_registration: bool,

    /// Process start time, reported as uptime by the health check.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state from a connected database and the configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `http_client` - HTTP client used by the Cloudinary store
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `Ok(AppState)` - Initialized application state
    /// - `Err(AppError::ConfigErr)` - A rate limit preset has a zero window or max
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: &Config,
    ) -> Result<Self, AppError> {
        Ok(Self {
            db,
            tokens: TokenService::new(&config.jwt_secret, config.jwt_expires_in),
            images: ImageStore::from_config(config, http_client),
            rate_limits: RateLimits::from_config(&config.rate_limits)?,
            bcrypt_cost: config.bcrypt_cost,
            allow_registration: config.allow_registration,
            started_at: Instant::now(),
        })
    }
}
