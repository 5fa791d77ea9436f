//! Named query result rows
//!
//! Every grouped statistics query returns one of these explicitly typed
//! records rather than an untyped row. Field names match the column aliases
//! in the SQL that produces them; rows deserialize straight from the
//! connection provider's JSON output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One group of a count/sum statistics query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    /// Dimension value (attraction name, payment method, ticket type, ...)
    pub label: String,

    /// Rows in the group
    pub count: u64,

    /// Summed amount over the group
    pub amount: f64,
}

/// A ranked breakdown entry with its derived share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub label: String,
    pub count: u64,
    pub amount: f64,
    /// Share of the breakdown's base metric, 0 when the base is 0
    pub percentage: f64,
}

/// Scalar sales totals over a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTotalsRow {
    pub order_count: u64,
    pub ticket_count: u64,
    pub revenue: f64,
}

/// One calendar day of grouped sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesRow {
    pub day: NaiveDate,
    pub orders: u64,
    pub tickets: u64,
    pub revenue: f64,
}

/// One attended visit joined to the visitor's birth date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRow {
    pub client_id: i32,

    /// Calendar date of the visit
    pub day: NaiveDate,

    /// Hour of day of the visit, 0-23
    pub hour: u32,

    pub birth_date: NaiveDate,
}

/// One calendar day of a grouped count query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: u64,
}
