use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::planet::PlanetDto;

/// Mission as nested inside a scientist payload. Embeds the destination
/// planet but not the owning scientist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub planet: PlanetDto,
}
