//! Planet domain model and parameters.
//!
//! Planets are the destinations missions fly to. They are created through
//! seeding rather than the HTTP API, so only creation parameters and the
//! read-side model are needed.

/// Planet with its location data.
///
/// Distances are stored as whole light years from Earth.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub distance_from_earth: i32,
    pub nearest_star: String,
}

impl Planet {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            distance_from_earth: entity.distance_from_earth,
            nearest_star: entity.nearest_star,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `PlanetDto` - DTO with all planet fields for serialization
    pub fn into_dto(self) -> crate::model::planet::PlanetDto {
        crate::model::planet::PlanetDto {
            id: self.id,
            name: self.name,
            distance_from_earth: self.distance_from_earth,
            nearest_star: self.nearest_star,
        }
    }
}

/// Parameters for creating a new planet.
#[derive(Debug, Clone)]
pub struct CreatePlanetParams {
    pub name: String,
    pub distance_from_earth: i32,
    pub nearest_star: String,
}
