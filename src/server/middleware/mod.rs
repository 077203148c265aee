//! Request guards and tower middleware.
//!
//! - `auth` - Bearer token guard called from admin handlers
//! - `rate_limit` - Keyed per-IP rate limiters applied per route group
//! - `security` - Security response headers and CORS

pub mod auth;
pub mod rate_limit;
pub mod security;

#[cfg(test)]
mod test;
