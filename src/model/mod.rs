//! Wire DTOs shared by every HTTP endpoint.
//!
//! Field names serialize in camelCase to match the JSON the frontend consumes.

pub mod api;
pub mod arcana;
pub mod auth;
pub mod equipment;
pub mod health;
pub mod hero;
pub mod meta;
pub mod news;
pub mod upload;
