pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20250612_000001_offers_and_calls;
mod m20250612_000002_click_records_and_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_offers_and_calls::Migration),
            Box::new(m20250612_000002_click_records_and_logs::Migration),
        ]
    }
}
