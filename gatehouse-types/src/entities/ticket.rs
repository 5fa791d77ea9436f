//! Ticket entity definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single admission ticket belonging to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Primary key
    pub id: i32,

    /// Owning order
    pub order_id: i32,

    /// Visiting client
    pub client_id: i32,

    /// Attraction the ticket admits to
    pub attraction_id: i32,

    /// Fare class
    pub ticket_type: TicketType,

    /// Price paid for this ticket
    pub price: f64,

    /// Validation status
    pub status: TicketStatus,

    /// Scheduled visit date and time
    pub visit_at: DateTime<Utc>,

    /// Last instant the ticket can be used
    pub valid_until: DateTime<Utc>,
}

/// Ticket fare classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Standard,
    Child,
    Senior,
    GroupPass,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Standard => "standard",
            TicketType::Child => "child",
            TicketType::Senior => "senior",
            TicketType::GroupPass => "group_pass",
        }
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Sold, not yet confirmed for entry
    Issued,

    /// Confirmed for a visit slot
    Confirmed,

    /// Scanned at the gate
    Used,

    /// Validity window elapsed unused
    Expired,

    /// Voided before use
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Issued => "issued",
            TicketStatus::Confirmed => "confirmed",
            TicketStatus::Used => "used",
            TicketStatus::Expired => "expired",
            TicketStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses that count as an actual visit for attendance reporting
    pub fn is_attended(&self) -> bool {
        matches!(self, TicketStatus::Confirmed | TicketStatus::Used)
    }
}

impl Ticket {
    /// Create a new issued ticket (id assigned on insert)
    pub fn new(
        order_id: i32,
        client_id: i32,
        attraction_id: i32,
        price: f64,
        visit_at: DateTime<Utc>,
        valid_until: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            order_id,
            client_id,
            attraction_id,
            ticket_type: TicketType::Standard,
            price,
            status: TicketStatus::Issued,
            visit_at,
            valid_until,
        }
    }
}
