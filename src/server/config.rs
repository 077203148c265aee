use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

/// Origins always allowed by CORS, extended by `FRONTEND_URL` and `CORS_ORIGIN`.
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
    "https://bloghok-frontend.onrender.com",
    "https://blog-hok-fe.onrender.com",
    "https://blog-hok.onrender.com",
];

const DEFAULT_CLOUDINARY_FOLDER: &str = "BlogHok";

/// Credentials for the Cloudinary upload API.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

/// Window and request budget of one rate limit preset.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitRule {
    pub window: Duration,
    pub max: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub api: RateLimitRule,
    pub auth: RateLimitRule,
    pub upload: RateLimitRule,
    pub search: RateLimitRule,
}

pub struct Config {
    pub host: String,
    pub port: u16,

    pub database_url: String,
    pub db_max_pool_size: u32,
    pub db_connection_timeout: Duration,

    pub jwt_secret: String,
    pub jwt_expires_in: chrono::Duration,
    pub bcrypt_cost: u32,
    pub allow_registration: bool,

    pub cors_origins: Vec<String>,

    pub upload_dir: PathBuf,
    pub upload_retention_days: u32,
    /// Set only when all three Cloudinary credentials are present.
    pub cloudinary: Option<CloudinaryConfig>,

    pub rate_limits: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let mut cors_origins: Vec<String> =
            DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect();
        for var in ["FRONTEND_URL", "CORS_ORIGIN"] {
            if let Ok(value) = std::env::var(var) {
                cors_origins.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string),
                );
            }
        }

        let cloudinary = match (
            std::env::var("CLOUDINARY_CLOUD_NAME"),
            std::env::var("CLOUDINARY_API_KEY"),
            std::env::var("CLOUDINARY_API_SECRET"),
        ) {
            (Ok(cloud_name), Ok(api_key), Ok(api_secret))
                if !cloud_name.is_empty() && !api_key.is_empty() && !api_secret.is_empty() =>
            {
                Some(CloudinaryConfig {
                    cloud_name,
                    api_key,
                    api_secret,
                    folder: std::env::var("CLOUDINARY_FOLDER")
                        .unwrap_or_else(|_| DEFAULT_CLOUDINARY_FOLDER.to_string()),
                })
            }
            _ => None,
        };

        Ok(Self {
            host: optional("HOST", "0.0.0.0".to_string())?,
            port: optional("PORT", 7000)?,
            database_url: required("DATABASE_URL")?,
            db_max_pool_size: optional("DB_MAX_POOL_SIZE", 10)?,
            db_connection_timeout: Duration::from_millis(optional("DB_CONNECTION_TIMEOUT", 30_000)?),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_in: chrono::Duration::hours(optional("JWT_EXPIRES_IN_HOURS", 24)?),
            bcrypt_cost: optional("BCRYPT_COST", 12)?,
            allow_registration: optional("ALLOW_REGISTRATION", true)?,
            cors_origins,
            upload_dir: PathBuf::from(optional("UPLOAD_DIR", "uploads".to_string())?),
            upload_retention_days: optional("UPLOAD_RETENTION_DAYS", 30)?,
            cloudinary,
            rate_limits: RateLimitConfig {
                api: rule("RATE_LIMIT_WINDOW_MS", 15 * 60 * 1000, "RATE_LIMIT_MAX", 100)?,
                auth: rule("AUTH_RATE_LIMIT_WINDOW_MS", 15 * 60 * 1000, "AUTH_RATE_LIMIT_MAX", 5)?,
                upload: rule(
                    "UPLOAD_RATE_LIMIT_WINDOW_MS",
                    60 * 60 * 1000,
                    "UPLOAD_RATE_LIMIT_MAX",
                    10,
                )?,
                search: rule("SEARCH_RATE_LIMIT_WINDOW_MS", 60 * 1000, "SEARCH_RATE_LIMIT_MAX", 30)?,
            },
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads a required environment variable.
fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn rule(
    window_var: &str,
    default_window_ms: u64,
    max_var: &str,
    default_max: u32,
) -> Result<RateLimitRule, ConfigError> {
    Ok(RateLimitRule {
        window: Duration::from_millis(optional(window_var, default_window_ms)?),
        max: optional(max_var, default_max)?,
    })
}

#[cfg(test)]
impl Config {
    /// Configuration used by router-level tests: local uploads into a temp dir and the
    /// default rate limits.
    pub fn for_test() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_max_pool_size: 1,
            db_connection_timeout: Duration::from_secs(5),
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in: chrono::Duration::hours(24),
            bcrypt_cost: 4,
            allow_registration: true,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            upload_dir: std::env::temp_dir().join("bloghok-test-uploads"),
            upload_retention_days: 30,
            cloudinary: None,
            rate_limits: RateLimitConfig {
                api: RateLimitRule {
                    window: Duration::from_secs(15 * 60),
                    max: 100,
                },
                auth: RateLimitRule {
                    window: Duration::from_secs(15 * 60),
                    max: 5,
                },
                upload: RateLimitRule {
                    window: Duration::from_secs(60 * 60),
                    max: 10,
                },
                search: RateLimitRule {
                    window: Duration::from_secs(60),
                    max: 30,
                },
            },
        }
    }
}
