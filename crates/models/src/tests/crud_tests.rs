use crate::db::connect;
use crate::{customer, employee, pet_store, pet_store_customer};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[test]
fn validate_name_rejects_blank() {
    assert!(pet_store::validate_name("  ").is_err());
    assert!(pet_store::validate_name("Happy Tails").is_ok());
}

#[test]
fn validate_email_requires_at_sign() {
    assert!(customer::validate_email("not-an-email").is_err());
    assert!(customer::validate_email("bob@example.com").is_ok());
}

#[test]
fn validate_employee_names_rejects_blank() {
    assert!(employee::validate_names("", "Smith").is_err());
    assert!(employee::validate_names("Alice", " ").is_err());
    assert!(employee::validate_names("Alice", "Smith").is_ok());
}

/// Test pet store CRUD operations
#[tokio::test]
async fn test_pet_store_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
    };

    let name = format!("test_store_{}", Uuid::new_v4());
    let created =
        pet_store::create(&db, &name, "12 Main St", "Springfield", "IL", "62704", "555-0100").await?;
    assert_eq!(created.name, name);

    let found = pet_store::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.city, "Springfield");

    // Update scalar fields through the active model
    let mut am: pet_store::ActiveModel = found.into();
    am.phone = Set("555-0199".to_string());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.created_at, created.created_at);

    pet_store::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = pet_store::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

/// Test employee CRUD and the store -> employee delete cascade
#[tokio::test]
async fn test_employee_crud_and_cascade() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
    };

    let store_name = format!("emp_store_{}", Uuid::new_v4());
    let store =
        pet_store::create(&db, &store_name, "3 Oak Ave", "Portland", "OR", "97201", "555-0120").await?;

    let emp = employee::create(&db, store.id, "Alice", "Smith", "555-0111", "Clerk").await?;
    assert_eq!(emp.pet_store_id, Some(store.id));

    let found = employee::Entity::find_by_id(emp.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().first_name, "Alice");

    // Employees are reachable from their store
    let employees = store.find_related(employee::Entity).all(&db).await?;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, emp.id);

    // Deleting the store cascades to its employees
    pet_store::Entity::delete_by_id(store.id).exec(&db).await?;
    let after = employee::Entity::find_by_id(emp.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

/// Test customer membership through the join table
#[tokio::test]
async fn test_customer_membership() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
    };

    let store_name = format!("cust_store_{}", Uuid::new_v4());
    let store =
        pet_store::create(&db, &store_name, "7 Elm St", "Austin", "TX", "78701", "555-0130").await?;
    let email = format!("bob_{}@example.com", Uuid::new_v4());
    let cust = customer::create(&db, "Bob", "Jones", &email).await?;

    let link = pet_store_customer::ActiveModel {
        pet_store_id: Set(store.id),
        customer_id: Set(cust.id),
    };
    link.insert(&db).await?;

    let customers = store.find_related(customer::Entity).all(&db).await?;
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, cust.id);

    let stores = cust.find_related(pet_store::Entity).all(&db).await?;
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].id, store.id);

    // Deleting the store removes the association but keeps the customer
    pet_store::Entity::delete_by_id(store.id).exec(&db).await?;
    let link_after = pet_store_customer::Entity::find_by_id((store.id, cust.id)).one(&db).await?;
    assert!(link_after.is_none());
    let cust_after = customer::Entity::find_by_id(cust.id).one(&db).await?;
    assert!(cust_after.is_some());

    customer::Entity::delete_by_id(cust.id).exec(&db).await?;

    Ok(())
}
