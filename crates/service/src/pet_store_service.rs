use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::info;
use uuid::Uuid;

use models::{customer, employee, pet_store};

use crate::data::{PetStoreData, PetStoreInput};
use crate::errors::ServiceError;

/// Create a new store or update an existing one; returns the full
/// representation with shaped employee/customer collections.
pub async fn upsert_pet_store(
    db: &DatabaseConnection,
    input: PetStoreInput,
) -> Result<PetStoreData, ServiceError> {
    let saved = match input.id {
        None => {
            pet_store::create(
                db,
                &input.name,
                &input.address,
                &input.city,
                &input.state,
                &input.zip,
                &input.phone,
            )
            .await?
        }
        Some(id) => {
            pet_store::validate_name(&input.name)?;
            let existing = find_pet_store(db, id).await?;
            let mut am: pet_store::ActiveModel = existing.into();
            am.name = Set(input.name);
            am.address = Set(input.address);
            am.city = Set(input.city);
            am.state = Set(input.state);
            am.zip = Set(input.zip);
            am.phone = Set(input.phone);
            am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        }
    };
    shape_full(db, &saved).await
}

/// Fetch a store by id or fail with the standard not-found message.
pub(crate) async fn find_pet_store(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<pet_store::Model, ServiceError> {
    pet_store::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Pet store", id))
}

pub async fn get_pet_store(db: &DatabaseConnection, id: Uuid) -> Result<PetStoreData, ServiceError> {
    let store = find_pet_store(db, id).await?;
    shape_full(db, &store).await
}

/// All stores as lightweight summaries; nested collections stay empty.
pub async fn list_pet_stores(db: &DatabaseConnection) -> Result<Vec<PetStoreData>, ServiceError> {
    let stores = pet_store::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(stores.iter().map(PetStoreData::summary).collect())
}

/// Delete a store; the schema cascades to employees and association rows.
pub async fn delete_pet_store(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let store = find_pet_store(db, id).await?;
    store.delete(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(%id, "pet store deleted");
    Ok(())
}

async fn shape_full(
    db: &DatabaseConnection,
    store: &pet_store::Model,
) -> Result<PetStoreData, ServiceError> {
    let employees = store
        .find_related(employee::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let customers = store
        .find_related(customer::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(PetStoreData::shape(store, &employees, &customers))
}
