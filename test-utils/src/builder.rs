use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder assembling a test context with the schema a test needs.
///
/// Each test gets its own in-memory SQLite database. Add the entity tables
/// the test touches, then call `build()` to open the database and create
/// them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Scientist, Planet};
///
/// let test = TestBuilder::new()
///     .with_table(Scientist)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to run during database setup, generated from
    /// entity models and executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of a single entity to the schema.
    ///
    /// The CREATE TABLE statement is derived from the entity definition with
    /// SQLite syntax and runs when `build()` is called. Add referenced tables
    /// before the tables whose foreign keys point at them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity whose table should exist in the test database
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for mission operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Scientist
    /// - Planet
    /// - Mission
    ///
    /// Use this when testing anything that touches missions, since the missions
    /// table carries foreign keys to both of the other tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_mission_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mission_tables(self) -> Self {
        self.with_table(Scientist).with_table(Planet).with_table(Mission)
    }

    /// Opens the test database and creates every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database up and the schema in place
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
