//! Keyed per-client rate limiting.
//!
//! Each preset counts requests per client IP in fixed windows. A client's window opens on
//! its first request and admits `max` requests; request `max + 1` is rejected until the
//! window ends, at which point the count starts over.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::RETRY_AFTER, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;

use crate::{
    model::api::RateLimitedDto,
    server::{
        config::{RateLimitConfig, RateLimitRule},
        error::config::ConfigError,
    },
};

/// Key used when no client address can be determined.
const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    hits: u32,
}

/// One rate limit preset with the message returned when it rejects.
#[derive(Clone)]
pub struct Limiter {
    windows: Arc<Mutex<HashMap<String, Window>>>,
    rule: RateLimitRule,
    message: &'static str,
}

impl Limiter {
    /// Builds a limiter from a configured rule.
    ///
    /// # Returns
    /// - `Ok(Limiter)` - Limiter allowing `rule.max` requests per `rule.window`
    /// - `Err(ConfigError::InvalidRateLimit)` - Window or max is zero
    pub fn new(name: &str, rule: RateLimitRule, message: &'static str) -> Result<Self, ConfigError> {
        if rule.max == 0 || rule.window.is_zero() {
            return Err(ConfigError::InvalidRateLimit(name.to_string()));
        }

        Ok(Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            rule,
            message,
        })
    }

    /// Counts one request for `key`.
    ///
    /// # Returns
    /// - `Ok(())` - Request allowed
    /// - `Err(Duration)` - Rejected, with the time until the client's window resets
    pub fn check(&self, key: &str) -> Result<(), Duration> {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Result<(), Duration> {
        let mut windows = self.windows.lock();
        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            hits: 0,
        });

        if now.saturating_duration_since(window.started) >= self.rule.window {
            *window = Window {
                started: now,
                hits: 0,
            };
        }

        if window.hits >= self.rule.max {
            return Err((window.started + self.rule.window).saturating_duration_since(now));
        }

        window.hits += 1;
        Ok(())
    }

    fn reject(&self, wait: Duration) -> Response {
        // Whole seconds, rounded up.
        let retry_after = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);

        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(RateLimitedDto {
                success: false,
                error: self.message.to_string(),
                retry_after,
            }),
        )
            .into_response();
        response
            .headers_mut()
            .insert(RETRY_AFTER, HeaderValue::from(retry_after));
        response
    }

    fn tracked(&self) -> usize {
        self.windows.lock().len()
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock();
        windows.retain(|_, w| now.saturating_duration_since(w.started) < self.rule.window);
        windows.shrink_to_fit();
        windows.len()
    }
}

/// The four presets applied by the router.
#[derive(Clone)]
pub struct RateLimits {
    /// Every `/api` route.
    pub api: Limiter,
    /// Login and registration.
    pub auth: Limiter,
    pub upload: Limiter,
    /// List and search endpoints.
    pub search: Limiter,
}

impl RateLimits {
    pub fn from_config(config: &RateLimitConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            api: Limiter::new(
                "api",
                config.api,
                "Too many API requests, please try again later",
            )?,
            auth: Limiter::new(
                "auth",
                config.auth,
                "Too many authentication attempts, please try again later",
            )?,
            upload: Limiter::new(
                "upload",
                config.upload,
                "Too many file uploads, please try again later",
            )?,
            search: Limiter::new(
                "search",
                config.search,
                "Too many search requests, please slow down",
            )?,
        })
    }

    fn presets(&self) -> [&Limiter; 4] {
        [&self.api, &self.auth, &self.upload, &self.search]
    }

    /// Clients currently tracked across all presets.
    pub fn tracked_clients(&self) -> usize {
        self.presets().into_iter().map(Limiter::tracked).sum()
    }

    /// Drops clients whose window has ended.
    ///
    /// # Returns
    /// - `usize` - Number of clients still tracked across all presets
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        self.presets()
            .into_iter()
            .map(|limiter| limiter.purge_expired_at(now))
            .sum()
    }
}

/// Middleware rejecting requests over the limiter's budget with 429.
///
/// Install with `axum::middleware::from_fn_with_state(limiter, enforce)`.
pub async fn enforce(State(limiter): State<Limiter>, request: Request, next: Next) -> Response {
    let connect_info = request.extensions().get::<ConnectInfo<SocketAddr>>().copied();
    let key = client_key(request.headers(), connect_info.map(|ConnectInfo(addr)| addr));

    match limiter.check(&key) {
        Ok(()) => next.run(request).await,
        Err(wait) => {
            tracing::warn!(
                "Rate limited {} {} for {}",
                request.method(),
                request.uri().path(),
                key
            );
            limiter.reject(wait)
        }
    }
}

/// Client identity: first `X-Forwarded-For` entry, then `X-Real-IP`, then the socket peer.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(first) = header("x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return first.to_string();
    }

    if let Some(real_ip) = header("x-real-ip") {
        return real_ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
