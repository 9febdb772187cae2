use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment holding the database connection for one test.
///
/// Wraps an in-memory SQLite database that is opened on first use and lives
/// for as long as the context does, keeping each test fully isolated.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance.
    ///
    /// `None` until `database()` is called, so tests that never touch the
    /// database pay nothing for it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context with no database connection yet.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets the database connection, opening the in-memory instance on the
    /// first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection valid for the context lifetime
    /// - `Err(TestError::Database)` - Opening the in-memory database failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Runs the given CREATE TABLE statements against the test database.
    ///
    /// Statements execute in order, so parent tables must come before the
    /// tables whose foreign keys point at them. Called by `TestBuilder::build()`
    /// rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - Schema is in place
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
