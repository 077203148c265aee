//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Parameter types (`*Params`, `*Patch`, `*ListQuery`) are built
//! from request DTOs and carry already-validated values into the service layer.

pub mod arcana;
pub mod equipment;
pub mod hero;
pub mod meta;
pub mod news;
pub mod pagination;
pub mod user;
