//! SeaORM entity models for the BlogHok content database.
//!
//! Each module maps one table. Embedded sub-documents (skills, skins, stat blocks, tag
//! lists) are stored as JSON columns and decoded into typed models by the server's
//! repository layer. Cross-record references that need cleanup on delete (hero matchups,
//! equipment build links) get their own tables.

pub mod prelude;

pub mod arcana;
pub mod equipment;
pub mod equipment_build_link;
pub mod hero;
pub mod hero_matchup;
pub mod meta;
pub mod news;
pub mod user;
