//! Service offering entity definition

use serde::{Deserialize, Serialize};

/// A non-attraction venue service (lockers, parking, rentals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Primary key
    pub id: i32,

    /// Service name
    pub name: String,

    /// Price per purchase
    pub price: f64,

    /// Running purchase counter, incremented per sale
    pub purchase_count: u64,

    /// Whether the service is currently offered
    pub is_active: bool,
}

impl ServiceOffering {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            purchase_count: 0,
            is_active: true,
        }
    }
}
