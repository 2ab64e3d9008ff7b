#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::data::{CustomerInput, EmployeeInput, PetStoreInput};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect().await?;
    MIGRATED
        .get_or_init(|| async {
            migration::Migrator::up(&db, None).await.expect("migrate up");
        })
        .await;
    Ok(db)
}

pub fn store_input(name: &str) -> PetStoreInput {
    PetStoreInput {
        id: None,
        name: name.into(),
        address: "1 Bark Ln".into(),
        city: "Denver".into(),
        state: "CO".into(),
        zip: "80202".into(),
        phone: "555-0140".into(),
    }
}

pub fn employee_input(first_name: &str, last_name: &str) -> EmployeeInput {
    EmployeeInput {
        id: None,
        first_name: first_name.into(),
        last_name: last_name.into(),
        phone: "555-0111".into(),
        job_title: "Clerk".into(),
    }
}

pub fn customer_input(first_name: &str, last_name: &str) -> CustomerInput {
    CustomerInput {
        id: None,
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!("{}_{}@example.com", first_name.to_lowercase(), Uuid::new_v4()),
    }
}
