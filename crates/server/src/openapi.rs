use utoipa::OpenApi;
use uuid::Uuid;

#[derive(utoipa::ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct PetStoreInputDoc {
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

#[derive(utoipa::ToSchema)]
pub struct EmployeeInputDoc {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
}

#[derive(utoipa::ToSchema)]
pub struct CustomerInputDoc {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::pet_stores::create,
        crate::routes::pet_stores::update,
        crate::routes::pet_stores::list,
        crate::routes::pet_stores::get,
        crate::routes::pet_stores::delete,
        crate::routes::pet_stores::add_employee,
        crate::routes::pet_stores::add_customer,
    ),
    components(
        schemas(
            HealthResponse,
            PetStoreInputDoc,
            EmployeeInputDoc,
            CustomerInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pet_store"),
    )
)]
pub struct ApiDoc;
