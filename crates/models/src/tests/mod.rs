/// CRUD and relationship tests for all models
pub mod crud_tests;
