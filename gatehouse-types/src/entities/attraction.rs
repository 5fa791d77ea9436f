//! Attraction entity definition

use serde::{Deserialize, Serialize};

/// A ticketed attraction inside a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Primary key
    pub id: i32,

    /// Owning zone
    pub zone_id: i32,

    /// Attraction name
    pub name: String,

    /// Standard ticket price
    pub ticket_price: f64,

    /// Minimum visitor age, if restricted
    pub min_age: Option<u32>,

    /// Whether the attraction is currently operating
    pub is_active: bool,
}

impl Attraction {
    pub fn new(zone_id: i32, name: impl Into<String>, ticket_price: f64) -> Self {
        Self {
            id: 0,
            zone_id,
            name: name.into(),
            ticket_price,
            min_age: None,
            is_active: true,
        }
    }
}
