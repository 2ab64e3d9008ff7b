//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_pet_store;
mod m20240101_000002_create_employee;
mod m20240101_000003_create_customer;
mod m20240101_000004_create_pet_store_customer;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_pet_store::Migration),
            Box::new(m20240101_000002_create_employee::Migration),
            Box::new(m20240101_000003_create_customer::Migration),
            Box::new(m20240101_000004_create_pet_store_customer::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
