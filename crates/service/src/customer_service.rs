use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use models::{customer, pet_store_customer};

use crate::data::{CustomerInput, PetStoreCustomer};
use crate::errors::ServiceError;
use crate::pet_store_service::find_pet_store;

/// Create a new customer associated with the store, or update one whose
/// membership set already contains it. The customer write and the join
/// row land in a single transaction; re-association never duplicates
/// the membership.
pub async fn upsert_customer(
    db: &DatabaseConnection,
    pet_store_id: Uuid,
    input: CustomerInput,
) -> Result<PetStoreCustomer, ServiceError> {
    find_pet_store(db, pet_store_id).await?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let saved = match input.id {
        None => {
            customer::create(&txn, &input.first_name, &input.last_name, &input.email).await?
        }
        Some(id) => {
            let existing = find_member_customer(&txn, pet_store_id, id).await?;
            customer::validate_email(&input.email)?;
            let mut am: customer::ActiveModel = existing.into();
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.email = Set(input.email);
            am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?
        }
    };

    // Symmetric membership update, idempotent on re-association
    let member = pet_store_customer::Entity::find_by_id((pet_store_id, saved.id))
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if member.is_none() {
        let link = pet_store_customer::ActiveModel {
            pet_store_id: Set(pet_store_id),
            customer_id: Set(saved.id),
        };
        link.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    }

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(customer_id = %saved.id, %pet_store_id, "customer saved");
    Ok(PetStoreCustomer::from(&saved))
}

/// Fetch a customer and verify its membership set contains the store.
async fn find_member_customer(
    txn: &DatabaseTransaction,
    pet_store_id: Uuid,
    id: Uuid,
) -> Result<customer::Model, ServiceError> {
    let found = customer::Entity::find_by_id(id)
        .one(txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Customer", id))?;
    let member = pet_store_customer::Entity::find_by_id((pet_store_id, id))
        .one(txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if member.is_none() {
        return Err(ServiceError::does_not_belong("Customer", id, pet_store_id));
    }
    Ok(found)
}
