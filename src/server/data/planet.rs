use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::planet::CreatePlanetParams;

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, params: CreatePlanetParams) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            distance_from_earth: ActiveValue::Set(params.distance_from_earth),
            nearest_star: ActiveValue::Set(params.nearest_star),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }

    /// Gets the scientists whose missions fly to a planet, one entry per mission
    pub async fn get_scientists(&self, id: i32) -> Result<Vec<entity::scientist::Model>, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Planet with id {} not found",
                id
            )))?;

        planet
            .find_related(entity::prelude::Scientist)
            .all(self.db)
            .await
    }

    /// Deletes a planet and all missions headed for it in one transaction
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    entity::prelude::Mission::delete_many()
                        .filter(entity::mission::Column::PlanetId.eq(id))
                        .exec(txn)
                        .await?;

                    entity::prelude::Planet::delete_by_id(id).exec(txn).await?;

                    Ok(())
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(err) => err,
                TransactionError::Transaction(err) => err,
            })
    }

    /// Deletes all planets
    pub async fn delete_all(&self) -> Result<(), DbErr> {
        entity::prelude::Planet::delete_many().exec(self.db).await?;

        Ok(())
    }
}
