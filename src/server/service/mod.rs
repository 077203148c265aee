//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Uniqueness, reference checks and slug generation
//! - **Orchestration**: Coordinating repository calls with tokens and image storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod arcana;
pub mod auth;
pub mod equipment;
pub mod health;
pub mod hero;
pub mod meta;
pub mod news;
pub mod token;
pub mod upload;
