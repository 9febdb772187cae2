//! Mission domain model and parameters.
//!
//! A mission assigns a scientist to a destination planet. Missions are always
//! loaded together with their planet so API responses can embed the
//! destination without a second query.

use sea_orm::DbErr;

use super::planet::Planet;

/// Mission with its destination planet loaded.
#[derive(Debug, Clone)]
pub struct Mission {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub planet: Planet,
}

impl Mission {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The mission entity from the database
    /// - `planet` - The destination planet entity, loaded alongside the mission
    ///
    /// # Returns
    /// - `Ok(Mission)` - Successfully converted domain model with its planet
    /// - `Err(DbErr::RecordNotFound)` - The destination planet row is missing
    pub fn from_entity(
        entity: entity::mission::Model,
        planet: Option<entity::planet::Model>,
    ) -> Result<Self, DbErr> {
        let planet = planet.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Planet {} for mission {} not found",
                entity.planet_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            scientist_id: entity.scientist_id,
            planet_id: entity.planet_id,
            planet: Planet::from_entity(planet),
        })
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `MissionDto` - DTO with all mission fields and its planet for serialization
    pub fn into_dto(self) -> crate::model::mission::MissionDto {
        crate::model::mission::MissionDto {
            id: self.id,
            name: self.name,
            scientist_id: self.scientist_id,
            planet_id: self.planet_id,
            planet: self.planet.into_dto(),
        }
    }
}

/// Parameters for creating a new mission.
///
/// Like planets, missions are created through seeding rather than the
/// HTTP API.
#[derive(Debug, Clone)]
pub struct CreateMissionParams {
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
}
