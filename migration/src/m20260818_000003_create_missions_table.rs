use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260818_000001_create_scientists_table::Scientists,
    m20260818_000002_create_planets_table::Planets,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(pk_auto(Missions::Id))
                    .col(string(Missions::Name))
                    .col(integer(Missions::ScientistId))
                    .col(integer(Missions::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_scientist_id")
                            .from(Missions::Table, Missions::ScientistId)
                            .to(Scientists::Table, Scientists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_planet_id")
                            .from(Missions::Table, Missions::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Missions {
    Table,
    Id,
    Name,
    ScientistId,
    PlanetId,
}
