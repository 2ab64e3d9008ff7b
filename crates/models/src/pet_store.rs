use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::{customer, employee, pet_store_customer};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::has_many(employee::Entity).into(),
        }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { pet_store_customer::Relation::Customer.def() }
    fn via() -> Option<RelationDef> { Some(pet_store_customer::Relation::PetStore.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("pet store name required".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    zip: &str,
    phone: &str,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        zip: Set(zip.to_string()),
        phone: Set(phone.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
