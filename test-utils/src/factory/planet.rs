//! Planet factory for creating test planet entities.
//!
//! This module provides factory methods for creating planet entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// Provides a builder pattern for creating planet entities with default
/// values that can be overridden as needed for specific test scenarios. Names
/// are generated with a unique suffix to prevent conflicts between tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::planet::PlanetFactory;
///
/// let planet = PlanetFactory::new(&db)
///     .name("TRAPPIST-1e")
///     .distance_from_earth(41)
///     .nearest_star("TRAPPIST-1")
///     .build()
///     .await?;
/// ```
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    distance_from_earth: i32,
    nearest_star: String,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// The name receives a unique auto-incremented suffix to prevent conflicts
    /// when creating multiple planets in the same test.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlanetFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("Planet {}", id),
            distance_from_earth: 4,
            nearest_star: "Proxima Centauri".to_string(),
        }
    }

    /// Sets the planet name.
    ///
    /// # Arguments
    /// - `name` - Display name for the planet
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the distance from Earth in light years.
    ///
    /// # Arguments
    /// - `distance` - Distance in light years
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn distance_from_earth(mut self, distance: i32) -> Self {
        self.distance_from_earth = distance;
        self
    }

    /// Sets the nearest star.
    ///
    /// # Arguments
    /// - `star` - Name of the star closest to the planet
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn nearest_star(mut self, star: impl Into<String>) -> Self {
        self.nearest_star = star.into();
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            distance_from_earth: ActiveValue::Set(self.distance_from_earth),
            nearest_star: ActiveValue::Set(self.nearest_star),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
///
/// Shorthand for `PlanetFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::planet::Model)` - Created planet entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let planet = create_planet(&db).await?;
/// ```
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
