//! Scientist domain models and parameters.
//!
//! Scientists are the primary resource of the API. List views omit mission
//! data while detail views load every mission together with its destination
//! planet. Create and update parameters enforce the required-field rules
//! before anything reaches the database.

use sea_orm::DbErr;

use super::mission::Mission;
use crate::server::error::validation::ValidationError;

/// Scientist summary without mission data.
///
/// Used for list views where serializing the full mission tree per row
/// is unnecessary.
#[derive(Debug, Clone)]
pub struct ScientistListItem {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

impl ScientistListItem {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::scientist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            field_of_study: entity.field_of_study,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `ScientistListItemDto` - DTO with scientist summary fields for serialization
    pub fn into_dto(self) -> crate::model::scientist::ScientistListItemDto {
        crate::model::scientist::ScientistListItemDto {
            id: self.id,
            name: self.name,
            field_of_study: self.field_of_study,
        }
    }
}

/// Scientist with all related entity models for conversion.
///
/// Raw repository result containing the scientist and their missions, each
/// paired with its destination planet.
#[derive(Debug, Clone)]
pub struct ScientistWithMissions {
    /// The scientist entity.
    pub scientist: entity::scientist::Model,
    /// Missions with their planet entities.
    pub missions: Vec<(entity::mission::Model, Option<entity::planet::Model>)>,
}

/// Scientist with their missions fully loaded.
///
/// Detail view model containing the scientist and every mission together
/// with its destination planet.
#[derive(Debug, Clone)]
pub struct Scientist {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<Mission>,
}

impl Scientist {
    /// Converts entity models with relations to a domain model.
    ///
    /// # Arguments
    /// - `data` - Scientist with mission and planet entity data
    ///
    /// # Returns
    /// - `Ok(Scientist)` - Successfully converted domain model with all missions
    /// - `Err(DbErr::RecordNotFound)` - A mission's destination planet row is missing
    pub fn from_with_missions(data: ScientistWithMissions) -> Result<Self, DbErr> {
        let missions: Result<Vec<Mission>, DbErr> = data
            .missions
            .into_iter()
            .map(|(mission, planet)| Mission::from_entity(mission, planet))
            .collect();

        Ok(Self {
            id: data.scientist.id,
            name: data.scientist.name,
            field_of_study: data.scientist.field_of_study,
            missions: missions?,
        })
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `ScientistDto` - DTO with all scientist fields and missions for serialization
    pub fn into_dto(self) -> crate::model::scientist::ScientistDto {
        crate::model::scientist::ScientistDto {
            id: self.id,
            name: self.name,
            field_of_study: self.field_of_study,
            missions: self.missions.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a new scientist.
#[derive(Debug, Clone)]
pub struct CreateScientistParams {
    pub name: String,
    pub field_of_study: String,
}

impl CreateScientistParams {
    pub fn from_dto(dto: crate::model::scientist::CreateScientistDto) -> Self {
        Self {
            name: dto.name,
            field_of_study: dto.field_of_study,
        }
    }

    /// Checks the required-field rules before the write is attempted.
    ///
    /// # Returns
    /// - `Ok(())` - All required fields are present and non-empty
    /// - `Err(ValidationError::Required)` - A required field is missing or empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        if self.field_of_study.is_empty() {
            return Err(ValidationError::Required {
                field: "field_of_study",
            });
        }

        Ok(())
    }
}

/// Parameters for partially updating an existing scientist.
///
/// Only the provided fields are written. A provided field must still satisfy
/// the required-field rules, so an explicit empty string is rejected.
#[derive(Debug, Clone)]
pub struct UpdateScientistParams {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl UpdateScientistParams {
    pub fn from_dto(dto: crate::model::scientist::UpdateScientistDto) -> Self {
        Self {
            name: dto.name,
            field_of_study: dto.field_of_study,
        }
    }

    /// Checks the required-field rules for every field present in the patch.
    ///
    /// # Returns
    /// - `Ok(())` - Every provided field is non-empty
    /// - `Err(ValidationError::Required)` - A provided field is empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.name.as_deref(), Some("")) {
            return Err(ValidationError::Required { field: "name" });
        }
        if matches!(self.field_of_study.as_deref(), Some("")) {
            return Err(ValidationError::Required {
                field: "field_of_study",
            });
        }

        Ok(())
    }
}
