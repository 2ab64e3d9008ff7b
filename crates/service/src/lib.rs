//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod data;
pub mod errors;

pub mod customer_service;
pub mod employee_service;
pub mod pet_store_service;

#[cfg(test)]
pub mod test_support;
