use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{} with ID={} was not found", entity, id))
    }

    pub fn does_not_belong(entity: &str, id: Uuid, pet_store_id: Uuid) -> Self {
        Self::Validation(format!(
            "{} with ID={} does not belong to pet store with ID={}",
            entity, id, pet_store_id
        ))
    }
}
