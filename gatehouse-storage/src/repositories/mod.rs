//! Specialized repository implementations
//!
//! One module per entity with the filtered queries, joins and grouped
//! statistics the generic layer cannot express. Every repository also
//! exposes the generic CRUD surface for its table through `base()`.

pub mod attraction;
pub mod client;
pub mod employee;
pub mod order;
pub mod payment;
pub mod service_offering;
pub mod ticket;
pub mod zone;

pub use attraction::AttractionRepository;
pub use client::ClientRepository;
pub use employee::EmployeeRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use service_offering::ServiceOfferingRepository;
pub use ticket::TicketRepository;
pub use zone::ZoneRepository;

use std::sync::Arc;

use serde_json::Value;

use gatehouse_interfaces::{ConnectionProvider, StorageError, StorageResult};

/// Read an unsigned scalar column from an aggregate row
pub(crate) fn u64_field(row: &Value, column: &str) -> StorageResult<u64> {
    row.get(column).and_then(Value::as_u64).ok_or_else(|| {
        StorageError::Serialization(format!("aggregate row missing column {column}"))
    })
}

/// Read a numeric scalar column from an aggregate row
pub(crate) fn f64_field(row: &Value, column: &str) -> StorageResult<f64> {
    row.get(column).and_then(Value::as_f64).ok_or_else(|| {
        StorageError::Serialization(format!("aggregate row missing column {column}"))
    })
}

/// All specialized repositories wired over one shared connection provider
#[derive(Clone)]
pub struct Repositories {
    pub clients: Arc<ClientRepository>,
    pub employees: Arc<EmployeeRepository>,
    pub zones: Arc<ZoneRepository>,
    pub attractions: Arc<AttractionRepository>,
    pub services: Arc<ServiceOfferingRepository>,
    pub orders: Arc<OrderRepository>,
    pub tickets: Arc<TicketRepository>,
    pub payments: Arc<PaymentRepository>,
    provider: Arc<dyn ConnectionProvider>,
}

impl Repositories {
    /// Wire every repository over the given provider
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            clients: Arc::new(ClientRepository::new(provider.clone())),
            employees: Arc::new(EmployeeRepository::new(provider.clone())),
            zones: Arc::new(ZoneRepository::new(provider.clone())),
            attractions: Arc::new(AttractionRepository::new(provider.clone())),
            services: Arc::new(ServiceOfferingRepository::new(provider.clone())),
            orders: Arc::new(OrderRepository::new(provider.clone())),
            tickets: Arc::new(TicketRepository::new(provider.clone())),
            payments: Arc::new(PaymentRepository::new(provider.clone())),
            provider,
        }
    }

    /// Check health of the shared connection
    pub async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}
