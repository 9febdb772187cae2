//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
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
//!     // Create with defaults
//!     let scientist = factory::scientist::create_scientist(&db).await?;
//!     let planet = factory::planet::create_planet(&db).await?;
//!
//!     // Create with all dependencies
//!     let (scientist, planet, mission) =
//!         factory::helpers::create_mission_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let scientist = factory::scientist::ScientistFactory::new(&db)
//!     .name("Vera Rubin")
//!     .field_of_study("Astronomy")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `scientist` - Create scientist entities
//! - `planet` - Create planet entities
//! - `mission` - Create mission entities linking scientists to planets
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod mission;
pub mod planet;
pub mod scientist;

// Re-export commonly used factory functions for concise usage
pub use mission::create_mission;
pub use planet::create_planet;
pub use scientist::create_scientist;
