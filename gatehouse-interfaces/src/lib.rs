//! Core interfaces for the Gatehouse data layer
//!
//! This crate defines the contracts that enable dependency injection and
//! testing through interface segregation: the connection provider the
//! repositories run on, the generic CRUD surface, and the per-entity query
//! traits the reporting engine and dashboard consume. Implementations live
//! in `gatehouse-storage`; consumers depend only on these traits.

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::ConnectionProvider;
pub use error::{StorageError, StorageResult};
pub use repositories::{
    AttractionRepository, ClientRepository, CrudRepository, EmployeeRepository, OrderRepository,
    PaymentRepository, Repository, ServiceOfferingRepository, TicketRepository, ZoneRepository,
};
