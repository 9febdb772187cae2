//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources available to every request handler.
///
/// Built once during startup and cloned into each handler through Axum's
/// state extraction. Cloning is cheap: `DatabaseConnection` is a pool handle
/// and clones share the underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
