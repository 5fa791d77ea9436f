//! Order entity definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticket purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Primary key
    pub id: i32,

    /// External order reference
    pub uuid: Uuid,

    /// Purchasing client
    pub client_id: i32,

    /// Payment/fulfilment status
    pub status: OrderStatus,

    /// Total charged amount
    pub total_amount: f64,

    /// Number of tickets in the order
    pub ticket_count: u32,

    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created but not yet paid
    Pending,

    /// Payment captured
    Paid,

    /// Paid and all tickets used or expired
    Completed,

    /// Abandoned or voided before payment
    Cancelled,

    /// Paid then reimbursed
    Refunded,
}

impl OrderStatus {
    /// Column value as stored by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Statuses that count toward sales figures
    pub fn is_revenue(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Completed)
    }
}

impl Order {
    /// Create a new pending order (id assigned on insert)
    pub fn new(client_id: i32, total_amount: f64, ticket_count: u32) -> Self {
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            client_id,
            status: OrderStatus::Pending,
            total_amount,
            ticket_count,
            created_at: Utc::now(),
        }
    }
}
