//! BlogHok Test Utils
//!
//! Shared testing utilities for the BlogHok API. Provides a builder for test contexts backed
//! by in-memory SQLite databases plus factories for every content entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Hero;
//!
//! #[tokio::test]
//! async fn test_hero_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Hero)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
