//! Database repository layer for all domain entities.
//!
//! Each repository borrows the connection and exposes the queries one entity needs.
//! Repositories take parameter models and return domain models, so SeaORM entity types
//! stay below this boundary. Writes that span several tables run in a transaction.

pub mod arcana;
pub mod equipment;
pub mod health;
pub mod hero;
pub mod meta;
pub mod news;
pub mod user;

#[cfg(test)]
mod test;
