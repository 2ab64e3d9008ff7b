//! Transfer shapes for pet store requests and responses.
//!
//! Nested employee/customer records carry no back-references, so the
//! response graph is acyclic.

use models::{customer, employee, pet_store};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetStoreData {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub employees: Vec<PetStoreEmployee>,
    pub customers: Vec<PetStoreCustomer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetStoreEmployee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetStoreCustomer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetStoreInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub job_title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&employee::Model> for PetStoreEmployee {
    fn from(m: &employee::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            phone: m.phone.clone(),
            job_title: m.job_title.clone(),
        }
    }
}

impl From<&customer::Model> for PetStoreCustomer {
    fn from(m: &customer::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            email: m.email.clone(),
        }
    }
}

impl PetStoreData {
    /// Full representation: scalar fields plus shaped collections.
    pub fn shape(
        store: &pet_store::Model,
        employees: &[employee::Model],
        customers: &[customer::Model],
    ) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            address: store.address.clone(),
            city: store.city.clone(),
            state: store.state.clone(),
            zip: store.zip.clone(),
            phone: store.phone.clone(),
            employees: employees.iter().map(PetStoreEmployee::from).collect(),
            customers: customers.iter().map(PetStoreCustomer::from).collect(),
        }
    }

    /// Summary view for list responses: collections cleared.
    pub fn summary(store: &pet_store::Model) -> Self {
        Self::shape(store, &[], &[])
    }
}
