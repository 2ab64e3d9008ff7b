//! Create `pet_store` table, the aggregate root.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStore::Table)
                    .if_not_exists()
                    .col(uuid(PetStore::Id).primary_key())
                    .col(string_len(PetStore::Name, 128).not_null())
                    .col(string_len(PetStore::Address, 255).not_null())
                    .col(string_len(PetStore::City, 128).not_null())
                    .col(string_len(PetStore::State, 64).not_null())
                    .col(string_len(PetStore::Zip, 16).not_null())
                    .col(string_len(PetStore::Phone, 32).not_null())
                    .col(timestamp_with_time_zone(PetStore::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PetStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PetStore { Table, Id, Name, Address, City, State, Zip, Phone, CreatedAt }
