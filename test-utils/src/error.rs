use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failure while connecting to the test database or creating its schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
