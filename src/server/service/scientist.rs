use sea_orm::DatabaseConnection;

use crate::server::{
    data::scientist::ScientistRepository,
    error::{validation::ValidationError, AppError},
    model::scientist::{
        CreateScientistParams, Scientist, ScientistListItem, UpdateScientistParams,
    },
};

pub struct ScientistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScientistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all scientists without their mission data
    pub async fn get_all(&self) -> Result<Vec<ScientistListItem>, AppError> {
        let repo = ScientistRepository::new(self.db);

        let scientists = repo.get_all().await?;

        Ok(scientists
            .into_iter()
            .map(ScientistListItem::from_entity)
            .collect())
    }

    /// Gets a specific scientist by ID with their missions and planets
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Scientist>, AppError> {
        let repo = ScientistRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        result
            .map(Scientist::from_with_missions)
            .transpose()
            .map_err(Into::into)
    }

    /// Creates a new scientist
    pub async fn create(&self, params: CreateScientistParams) -> Result<Scientist, AppError> {
        params.validate()?;

        let repo = ScientistRepository::new(self.db);

        let scientist = repo
            .create(params)
            .await
            .map_err(ValidationError::WriteRejected)?;

        // Fetch full scientist with missions
        let full_result = repo
            .get_by_id(scientist.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Scientist not found after creation".to_string()))?;

        Ok(Scientist::from_with_missions(full_result)?)
    }

    /// Updates the provided fields of a scientist
    /// Returns None if the scientist doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateScientistParams,
    ) -> Result<Option<Scientist>, AppError> {
        let repo = ScientistRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        params.validate()?;

        repo.update(id, params)
            .await
            .map_err(ValidationError::WriteRejected)?;

        // Fetch full scientist with missions
        let full_result = repo.get_by_id(id).await?;

        full_result
            .map(Scientist::from_with_missions)
            .transpose()
            .map_err(Into::into)
    }

    /// Checks if a scientist exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = ScientistRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Deletes a scientist along with all of their missions
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ScientistRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
