//! Join table backing the store<->customer many-to-many relation.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{customer, pet_store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store_customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_store_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PetStore,
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PetStore => Entity::belongs_to(pet_store::Entity)
                .from(Column::PetStoreId)
                .to(pet_store::Column::Id)
                .into(),
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
