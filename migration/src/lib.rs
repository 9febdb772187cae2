pub use sea_orm_migration::prelude::*;

mod m20260818_000001_create_scientists_table;
mod m20260818_000002_create_planets_table;
mod m20260818_000003_create_missions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260818_000001_create_scientists_table::Migration),
            Box::new(m20260818_000002_create_planets_table::Migration),
            Box::new(m20260818_000003_create_missions_table::Migration),
        ]
    }
}
