//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::user::create_admin(&db).await?;
//!     let hero = factory::hero::HeroFactory::new(&db)
//!         .name("Arthur")
//!         .meta_tier("S")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Admin and regular user accounts
//! - `hero` - Heroes and their ally/counter matchups
//! - `news` - News posts
//! - `equipment` - Equipment items and build links
//! - `arcana` - Arcana pages
//! - `meta` - Patch meta snapshots
//! - `helpers` - Shared ID generation

pub mod arcana;
pub mod equipment;
pub mod helpers;
pub mod hero;
pub mod meta;
pub mod news;
pub mod user;

pub use arcana::create_arcana;
pub use equipment::{create_build_link, create_equipment};
pub use hero::{create_hero, create_matchup};
pub use meta::create_meta;
pub use news::create_news;
pub use user::{create_admin, create_user};
