//! Create `employee` table with FK to `pet_store`.
//!
//! Deleting a store deletes its employees (ON DELETE CASCADE).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    // Nullable by schema; the service always sets it
                    .col(ColumnDef::new(Employee::PetStoreId).uuid().null())
                    .col(string_len(Employee::FirstName, 128).not_null())
                    .col(string_len(Employee::LastName, 128).not_null())
                    .col(string_len(Employee::Phone, 32).not_null())
                    .col(string_len(Employee::JobTitle, 128).not_null())
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_pet_store")
                            .from(Employee::Table, Employee::PetStoreId)
                            .to(PetStore::Table, PetStore::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, Id, PetStoreId, FirstName, LastName, Phone, JobTitle, CreatedAt }

#[derive(DeriveIden)]
enum PetStore { Table, Id }
