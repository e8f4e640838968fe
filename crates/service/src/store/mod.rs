//! Store resource: repository abstraction, implementations and the service on top.

pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryStoreRepository;
pub use repository::{SeaOrmStoreRepository, StoreRepository};
pub use service::StoreService;
