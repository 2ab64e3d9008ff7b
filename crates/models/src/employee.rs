use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::pet_store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pet_store_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PetStore,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PetStore => Entity::belongs_to(pet_store::Entity)
                .from(Column::PetStoreId)
                .to(pet_store::Column::Id)
                .into(),
        }
    }
}

impl Related<pet_store::Entity> for Entity {
    fn to() -> RelationDef { Relation::PetStore.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), errors::ModelError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(errors::ModelError::Validation("employee first and last name required".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    pet_store_id: Uuid,
    first_name: &str,
    last_name: &str,
    phone: &str,
    job_title: &str,
) -> Result<Model, errors::ModelError> {
    validate_names(first_name, last_name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        pet_store_id: Set(Some(pet_store_id)),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        phone: Set(phone.to_string()),
        job_title: Set(job_title.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
