//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind `StoreRepository`.
//! - Reuses entity definitions from the `models` crate.

pub mod errors;
pub mod store;
#[cfg(test)]
pub mod test_support;
