use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Planet as nested inside a mission payload. Carries no missions list, so
/// the serialized graph never cycles back through the mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub distance_from_earth: i32,
    pub nearest_star: String,
}
