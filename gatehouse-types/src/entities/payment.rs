//! Payment entity definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A captured payment against an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Primary key
    pub id: i32,

    /// Paid order
    pub order_id: i32,

    /// Payment instrument
    pub method: PaymentMethod,

    /// Captured amount
    pub amount: f64,

    /// When the payment settled
    pub paid_at: DateTime<Utc>,
}

/// Supported payment instruments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Transfer,
    Voucher,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Voucher => "voucher",
        }
    }
}

impl Payment {
    pub fn new(order_id: i32, method: PaymentMethod, amount: f64) -> Self {
        Self {
            id: 0,
            order_id,
            method,
            amount,
            paid_at: Utc::now(),
        }
    }
}
