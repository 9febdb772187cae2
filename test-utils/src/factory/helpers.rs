//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete mission with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Scientist (as mission lead)
/// 2. Planet (as mission destination)
/// 3. Mission linking the two
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((scientist, planet, mission))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::scientist::Model,
        entity::planet::Model,
        entity::mission::Model,
    ),
    DbErr,
> {
    let scientist = crate::factory::scientist::create_scientist(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let mission = crate::factory::mission::create_mission(db, scientist.id, planet.id).await?;

    Ok((scientist, planet, mission))
}

/// Creates a mission for a specific scientist.
///
/// This creates a destination planet, then creates a mission assigned to the
/// provided scientist. Useful when a test needs several missions attached to
/// one scientist.
///
/// # Arguments
/// - `db` - Database connection
/// - `scientist` - Scientist entity to assign the mission to
///
/// # Returns
/// - `Ok((planet, mission))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mission_for_scientist(
    db: &DatabaseConnection,
    scientist: &entity::scientist::Model,
) -> Result<(entity::planet::Model, entity::mission::Model), DbErr> {
    let planet = crate::factory::planet::create_planet(db).await?;
    let mission = crate::factory::mission::create_mission(db, scientist.id, planet.id).await?;

    Ok((planet, mission))
}
