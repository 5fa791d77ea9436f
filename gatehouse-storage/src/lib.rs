//! Storage layer for Gatehouse
//!
//! This crate provides the generic repository pattern over an injected
//! connection provider: a descriptor-driven CRUD engine that serves every
//! table from one implementation, plus the specialized per-table
//! repositories with the filtered queries, joins and grouped statistics
//! the generic layer cannot express. Contracts live in
//! `gatehouse-interfaces`; domain records in `gatehouse-types`.

pub mod config;
pub mod record;
pub mod repositories;
pub mod schema;
pub mod sql;
pub mod table;
pub mod testing;

// Re-export core types for convenience
pub use config::{StorageBackend, StorageConfig};
pub use record::Record;
pub use table::TableRepository;

// Repository re-exports
pub use repositories::{
    AttractionRepository, ClientRepository, EmployeeRepository, OrderRepository,
    PaymentRepository, Repositories, ServiceOfferingRepository, TicketRepository, ZoneRepository,
};
