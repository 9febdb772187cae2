//! Missionboard Test Utils
//!
//! Shared helpers for the missionboard test suites. The crate builds
//! throwaway in-memory SQLite databases carrying exactly the tables a test
//! needs, plus factories for populating them.
//!
//! # Overview
//!
//! - **TestBuilder**: configures which entity tables the test database gets
//! - **TestContext**: owns the database connection for one test
//! - **TestError**: failures during test setup
//! - **factory**: creates rows with sensible defaults for each entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Scientist;
//!
//! #[tokio::test]
//! async fn test_scientist_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Scientist)
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
