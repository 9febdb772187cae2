//! Database repository layer for all domain entities.
//!
//! Each repository owns the SeaORM queries for one table. Repositories accept
//! parameter models from the service layer and work with entity models
//! internally; rows are converted into domain models at the service boundary.
//! Multi-statement writes such as cascade deletes run inside a transaction
//! here rather than in the service layer.

pub mod mission;
pub mod planet;
pub mod scientist;
