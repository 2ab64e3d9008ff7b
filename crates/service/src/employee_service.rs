use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::info;
use uuid::Uuid;

use models::employee;

use crate::data::{EmployeeInput, PetStoreEmployee};
use crate::errors::ServiceError;
use crate::pet_store_service::find_pet_store;

/// Create a new employee under the store, or update one that already
/// belongs to it. Upserting an employee of another store fails
/// validation instead of silently reassigning it.
pub async fn upsert_employee(
    db: &DatabaseConnection,
    pet_store_id: Uuid,
    input: EmployeeInput,
) -> Result<PetStoreEmployee, ServiceError> {
    find_pet_store(db, pet_store_id).await?;

    let saved = match input.id {
        None => {
            employee::create(
                db,
                pet_store_id,
                &input.first_name,
                &input.last_name,
                &input.phone,
                &input.job_title,
            )
            .await?
        }
        Some(id) => {
            let existing = find_employee(db, pet_store_id, id).await?;
            employee::validate_names(&input.first_name, &input.last_name)?;
            let mut am: employee::ActiveModel = existing.into();
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.phone = Set(input.phone);
            am.job_title = Set(input.job_title);
            am.pet_store_id = Set(Some(pet_store_id));
            am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        }
    };
    info!(employee_id = %saved.id, %pet_store_id, "employee saved");
    Ok(PetStoreEmployee::from(&saved))
}

/// Fetch an employee and verify it belongs to the given store.
async fn find_employee(
    db: &DatabaseConnection,
    pet_store_id: Uuid,
    id: Uuid,
) -> Result<employee::Model, ServiceError> {
    let found = employee::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Employee", id))?;
    if found.pet_store_id != Some(pet_store_id) {
        return Err(ServiceError::does_not_belong("Employee", id, pet_store_id));
    }
    Ok(found)
}
