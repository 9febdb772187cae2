use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::mission::CreateMissionParams;

pub struct MissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mission
    pub async fn create(
        &self,
        params: CreateMissionParams,
    ) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            name: ActiveValue::Set(params.name),
            scientist_id: ActiveValue::Set(params.scientist_id),
            planet_id: ActiveValue::Set(params.planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all missions ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::mission::Model>, DbErr> {
        entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a mission by ID with its destination planet
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(entity::mission::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Mission::find_by_id(id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// Deletes a mission
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Mission::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Deletes all missions
    pub async fn delete_all(&self) -> Result<(), DbErr> {
        entity::prelude::Mission::delete_many().exec(self.db).await?;

        Ok(())
    }
}
