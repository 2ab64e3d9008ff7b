use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: index on pet_store_id
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_pet_store")
                    .table(Employee::Table)
                    .col(Employee::PetStoreId)
                    .to_owned(),
            )
            .await?;

        // Join table: the composite PK covers pet_store_id lookups;
        // reverse lookups by customer need their own index
        manager
            .create_index(
                Index::create()
                    .name("idx_pet_store_customer_customer")
                    .table(PetStoreCustomer::Table)
                    .col(PetStoreCustomer::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employee_pet_store").table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pet_store_customer_customer")
                    .table(PetStoreCustomer::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, PetStoreId }

#[derive(DeriveIden)]
enum PetStoreCustomer { Table, CustomerId }
