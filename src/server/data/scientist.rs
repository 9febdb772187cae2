use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::scientist::{
    CreateScientistParams, ScientistWithMissions, UpdateScientistParams,
};

pub struct ScientistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScientistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new scientist
    pub async fn create(
        &self,
        params: CreateScientistParams,
    ) -> Result<entity::scientist::Model, DbErr> {
        entity::scientist::ActiveModel {
            name: ActiveValue::Set(params.name),
            field_of_study: ActiveValue::Set(params.field_of_study),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all scientists ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::scientist::Model>, DbErr> {
        entity::prelude::Scientist::find()
            .order_by_asc(entity::scientist::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a scientist by ID with their missions and each mission's planet
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ScientistWithMissions>, DbErr> {
        let scientist = entity::prelude::Scientist::find_by_id(id).one(self.db).await?;

        if let Some(scientist) = scientist {
            let missions = entity::prelude::Mission::find()
                .find_also_related(entity::prelude::Planet)
                .filter(entity::mission::Column::ScientistId.eq(id))
                .order_by_asc(entity::mission::Column::Id)
                .all(self.db)
                .await?;

            Ok(Some(ScientistWithMissions {
                scientist,
                missions,
            }))
        } else {
            Ok(None)
        }
    }

    /// Gets the planets a scientist's missions fly to, one entry per mission
    pub async fn get_planets(&self, id: i32) -> Result<Vec<entity::planet::Model>, DbErr> {
        let scientist = entity::prelude::Scientist::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scientist with id {} not found",
                id
            )))?;

        scientist
            .find_related(entity::prelude::Planet)
            .all(self.db)
            .await
    }

    /// Updates the provided fields of a scientist and returns the updated row
    pub async fn update(
        &self,
        id: i32,
        params: UpdateScientistParams,
    ) -> Result<entity::scientist::Model, DbErr> {
        let scientist = entity::prelude::Scientist::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scientist with id {} not found",
                id
            )))?;

        let mut active_model: entity::scientist::ActiveModel = scientist.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(field_of_study) = params.field_of_study {
            active_model.field_of_study = ActiveValue::Set(field_of_study);
        }

        // An update with no changed columns fails with RecordNotUpdated
        if !active_model.is_changed() {
            return Ok(scientist);
        }

        active_model.update(self.db).await
    }

    /// Deletes a scientist and all of their missions in one transaction
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    entity::prelude::Mission::delete_many()
                        .filter(entity::mission::Column::ScientistId.eq(id))
                        .exec(txn)
                        .await?;

                    entity::prelude::Scientist::delete_by_id(id).exec(txn).await?;

                    Ok(())
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(err) => err,
                TransactionError::Transaction(err) => err,
            })
    }

    /// Checks if a scientist exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Scientist::find()
            .filter(entity::scientist::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes all scientists
    pub async fn delete_all(&self) -> Result<(), DbErr> {
        entity::prelude::Scientist::delete_many().exec(self.db).await?;

        Ok(())
    }
}
