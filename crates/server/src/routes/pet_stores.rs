use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use service::data::{
    CustomerInput, EmployeeInput, PetStoreCustomer, PetStoreData, PetStoreEmployee, PetStoreInput,
};
use service::{customer_service, employee_service, pet_store_service};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/pet_store", tag = "pet_store",
    request_body = crate::openapi::PetStoreInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PetStoreInput>,
) -> Result<(StatusCode, Json<PetStoreData>), ApiError> {
    info!(name = %input.name, "creating pet store");
    let data = pet_store_service::upsert_pet_store(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(data)))
}

#[utoipa::path(
    put, path = "/pet_store/{id}", tag = "pet_store",
    params(("id" = Uuid, Path, description = "Pet store ID")),
    request_body = crate::openapi::PetStoreInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(mut input): Json<PetStoreInput>,
) -> Result<Json<PetStoreData>, ApiError> {
    // The path id wins over any id in the body
    input.id = Some(id);
    info!(%id, "updating pet store");
    let data = pet_store_service::upsert_pet_store(&state.db, input).await?;
    Ok(Json(data))
}

#[utoipa::path(
    get, path = "/pet_store", tag = "pet_store",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PetStoreData>>, ApiError> {
    info!("retrieving all pet stores");
    let data = pet_store_service::list_pet_stores(&state.db).await?;
    Ok(Json(data))
}

#[utoipa::path(
    get, path = "/pet_store/{id}", tag = "pet_store",
    params(("id" = Uuid, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PetStoreData>, ApiError> {
    info!(%id, "retrieving pet store");
    let data = pet_store_service::get_pet_store(&state.db, id).await?;
    Ok(Json(data))
}

#[utoipa::path(
    delete, path = "/pet_store/{id}", tag = "pet_store",
    params(("id" = Uuid, Path, description = "Pet store ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    info!(%id, "deleting pet store");
    pet_store_service::delete_pet_store(&state.db, id).await?;
    Ok(Json(json!({
        "message": format!("Pet store with ID={} was deleted successfully", id)
    })))
}

#[utoipa::path(
    post, path = "/pet_store/{id}/employee", tag = "pet_store",
    params(("id" = Uuid, Path, description = "Pet store ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 404, description = "Not Found"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn add_employee(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<PetStoreEmployee>), ApiError> {
    info!(pet_store_id = %id, "adding employee to pet store");
    let data = employee_service::upsert_employee(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(data)))
}

#[utoipa::path(
    post, path = "/pet_store/{id}/customer", tag = "pet_store",
    params(("id" = Uuid, Path, description = "Pet store ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 404, description = "Not Found"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn add_customer(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<PetStoreCustomer>), ApiError> {
    info!(pet_store_id = %id, "adding customer to pet store");
    let data = customer_service::upsert_customer(&state.db, id, input).await?;
    Ok((StatusCode::CREATED, Json(data)))
}
