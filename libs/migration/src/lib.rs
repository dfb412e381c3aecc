pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_mission;
mod m20261018_000002_create_space_event;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_mission::Migration),
            Box::new(m20261018_000002_create_space_event::Migration),
        ]
    }
}
