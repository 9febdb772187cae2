use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::mission::MissionDto;

/// Scientist as returned by the list endpoint, without missions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScientistListItemDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

/// Scientist as returned by the detail, create, and update endpoints,
/// with the full mission list and each mission's destination planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScientistDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<MissionDto>,
}

/// Request body for creating a scientist.
///
/// Missing fields default to the empty string and are rejected by
/// validation, so an incomplete body produces the same response as an
/// empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateScientistDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field_of_study: String,
}

/// Request body for updating a scientist.
///
/// Only `name` and `field_of_study` may be updated. Unknown fields are
/// rejected rather than silently applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientistDto {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}
