//! Create `pet_store_customer` join table for the store<->customer
//! many-to-many relation. Composite primary key; deleting either side
//! removes only the association rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetStoreCustomer::Table)
                    .if_not_exists()
                    .col(uuid(PetStoreCustomer::PetStoreId).not_null())
                    .col(uuid(PetStoreCustomer::CustomerId).not_null())
                    .primary_key(
                        Index::create()
                            .col(PetStoreCustomer::PetStoreId)
                            .col(PetStoreCustomer::CustomerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_store_customer_pet_store")
                            .from(PetStoreCustomer::Table, PetStoreCustomer::PetStoreId)
                            .to(PetStore::Table, PetStore::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_store_customer_customer")
                            .from(PetStoreCustomer::Table, PetStoreCustomer::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PetStoreCustomer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PetStoreCustomer { Table, PetStoreId, CustomerId }

#[derive(DeriveIden)]
enum PetStore { Table, Id }

#[derive(DeriveIden)]
enum Customer { Table, Id }
