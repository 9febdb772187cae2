//! Scientist factory for creating test scientist entities.
//!
//! This module provides factory methods for creating scientist entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test scientists with customizable fields.
///
/// Provides a builder pattern for creating scientist entities with default
/// values that can be overridden as needed for specific test scenarios. Names
/// are generated with a unique suffix to prevent conflicts between tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::scientist::ScientistFactory;
///
/// let scientist = ScientistFactory::new(&db)
///     .name("Vera Rubin")
///     .field_of_study("Astronomy")
///     .build()
///     .await?;
/// ```
pub struct ScientistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    field_of_study: String,
}

impl<'a> ScientistFactory<'a> {
    /// Creates a new ScientistFactory with default values.
    ///
    /// The name receives a unique auto-incremented suffix to prevent conflicts
    /// when creating multiple scientists in the same test.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ScientistFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: format!("Scientist {}", id),
            field_of_study: "Astrophysics".to_string(),
        }
    }

    /// Sets the scientist name.
    ///
    /// # Arguments
    /// - `name` - Display name for the scientist
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the field of study.
    ///
    /// # Arguments
    /// - `field_of_study` - Discipline the scientist works in
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn field_of_study(mut self, field_of_study: impl Into<String>) -> Self {
        self.field_of_study = field_of_study.into();
        self
    }

    /// Builds and inserts the scientist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::scientist::Model)` - Created scientist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::scientist::Model, DbErr> {
        entity::scientist::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            field_of_study: ActiveValue::Set(self.field_of_study),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scientist with default values.
///
/// Shorthand for `ScientistFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::scientist::Model)` - Created scientist entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let scientist = create_scientist(&db).await?;
/// ```
pub async fn create_scientist(db: &DatabaseConnection) -> Result<entity::scientist::Model, DbErr> {
    ScientistFactory::new(db).build().await
}
