//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, turn request DTOs into validated parameter
//! types, call the matching service and convert the domain result back into a DTO.

pub mod arcana;
pub mod auth;
pub mod equipment;
pub mod health;
pub mod hero;
pub mod meta;
pub mod news;
pub mod upload;
