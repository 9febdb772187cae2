//! Mission factory for creating test mission entities.
//!
//! This module provides factory methods for creating mission entities with
//! sensible defaults, reducing boilerplate in tests. Missions reference an
//! existing scientist and planet, so both must be created first.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions with customizable fields.
///
/// Provides a builder pattern for creating mission entities with default
/// values that can be overridden as needed for specific test scenarios. Names
/// are generated with a unique suffix to prevent conflicts between tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mission::MissionFactory;
///
/// let mission = MissionFactory::new(&db, scientist.id, planet.id)
///     .name("Pale Blue Dot Survey")
///     .build()
///     .await?;
/// ```
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    scientist_id: i32,
    planet_id: i32,
}

impl<'a> MissionFactory<'a> {
    /// Creates a new MissionFactory with default values.
    ///
    /// The name receives a unique auto-incremented suffix to prevent conflicts
    /// when creating multiple missions in the same test. The scientist and
    /// planet ids are set to the provided values and must reference rows that
    /// already exist.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `scientist_id` - Scientist the mission is assigned to
    /// - `planet_id` - Planet the mission is headed for
    ///
    /// # Returns
    /// - `MissionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, scientist_id: i32, planet_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("Mission {}", id),
            scientist_id,
            planet_id,
        }
    }

    /// Sets the mission name.
    ///
    /// # Arguments
    /// - `name` - Display name for the mission
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the mission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mission::Model)` - Created mission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            scientist_id: ActiveValue::Set(self.scientist_id),
            planet_id: ActiveValue::Set(self.planet_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission with default values for the given scientist and planet.
///
/// Shorthand for `MissionFactory::new(db, scientist_id, planet_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `scientist_id` - Scientist the mission is assigned to
/// - `planet_id` - Planet the mission is headed for
///
/// # Returns
/// - `Ok(entity::mission::Model)` - Created mission entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let mission = create_mission(&db, scientist.id, planet.id).await?;
/// ```
pub async fn create_mission(
    db: &DatabaseConnection,
    scientist_id: i32,
    planet_id: i32,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, scientist_id, planet_id).build().await
}
