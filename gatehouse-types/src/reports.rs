//! Report result definitions
//!
//! Aggregate value objects assembled by the reporting engine. These are
//! never persisted; each report is owned by the caller that requested it.
//! Dimensional breakdown entries carry a derived `percentage` that is 0.0
//! whenever the base metric is zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sales figures over an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Report range start (inclusive)
    pub start_date: NaiveDate,

    /// Report range end (inclusive)
    pub end_date: NaiveDate,

    /// Paid/completed orders in range
    pub total_orders: u64,

    /// Tickets sold on those orders
    pub total_tickets: u64,

    /// Revenue over those orders
    pub total_revenue: f64,

    /// Revenue divided by order count, 0 when there are no orders
    pub average_order_value: f64,

    /// Per-day figures, date ascending
    pub daily: Vec<DailySales>,

    /// Per-attraction figures, revenue descending
    pub by_attraction: Vec<AttractionSales>,

    /// Per-payment-method figures, amount descending
    pub by_payment_method: Vec<PaymentMethodSales>,
}

/// One calendar day of the sales report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub orders: u64,
    pub tickets: u64,
    pub revenue: f64,
}

/// One attraction's share of the sales report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionSales {
    pub attraction: String,
    pub tickets: u64,
    pub revenue: f64,
    /// Share of total revenue, 0 when total revenue is 0
    pub percentage: f64,
}

/// One payment method's share of the sales report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodSales {
    pub method: String,
    pub count: u64,
    pub amount: f64,
    /// Share of the summed payment amounts, 0 when the sum is 0
    pub percentage: f64,
}

/// Client-base figures anchored to the time the report was requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    /// All registered clients
    pub total_users: u64,

    /// Clients currently able to buy tickets
    pub active_users: u64,

    /// Clients registered in the current calendar month
    pub new_this_month: u64,

    /// Revenue divided by total clients, 0 when there are no clients
    pub average_spend_per_user: f64,

    /// Up to ten clients by lifetime spend, descending
    pub top_spenders: Vec<TopSpender>,

    /// Registration counts over the last 30 days, date ascending.
    /// Days without registrations are omitted.
    pub daily_registrations: Vec<DailyRegistrations>,
}

/// One client in the top-spenders list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSpender {
    pub client_id: i32,
    pub full_name: String,
    pub order_count: u64,
    pub total_spent: f64,
}

/// One day of the registration series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRegistrations {
    pub date: NaiveDate,
    pub count: u64,
}

/// Attendance figures over an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Distinct visitors holding a confirmed or used ticket in range
    pub total_visitors: u64,

    /// Busiest single day, None when there were no visits
    pub peak_day: Option<NaiveDate>,

    /// Visitor count on the peak day
    pub peak_day_visitors: u64,

    /// Distinct visitors per hour of day, hour ascending.
    /// Hours without visits are omitted.
    pub hourly: Vec<HourlyAttendance>,

    /// Visitors bucketed into the four fixed age bands; every band is
    /// always present, zero counts carry percentage 0
    pub by_age_group: Vec<AgeGroupAttendance>,
}

/// One hour-of-day slot of the attendance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyAttendance {
    /// Hour of day, 0-23
    pub hour: u32,
    pub visitors: u64,
    /// Share of total visitors, 0 when there are none
    pub percentage: f64,
}

/// One age band of the attendance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupAttendance {
    pub group: AgeGroup,
    pub visitors: u64,
    pub percentage: f64,
}

/// Fixed reporting age bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "under_18")]
    UnderEighteen,
    #[serde(rename = "18_30")]
    EighteenToThirty,
    #[serde(rename = "31_50")]
    ThirtyOneToFifty,
    #[serde(rename = "51_plus")]
    FiftyOnePlus,
}

impl AgeGroup {
    /// All bands in report order
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::UnderEighteen,
        AgeGroup::EighteenToThirty,
        AgeGroup::ThirtyOneToFifty,
        AgeGroup::FiftyOnePlus,
    ];

    /// Band for an age in whole years
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::UnderEighteen,
            18..=30 => AgeGroup::EighteenToThirty,
            31..=50 => AgeGroup::ThirtyOneToFifty,
            _ => AgeGroup::FiftyOnePlus,
        }
    }

    /// Band for a date of birth as of the given date.
    /// A birth date in the future counts as age 0.
    pub fn from_birth_date(birth: NaiveDate, on: NaiveDate) -> Self {
        Self::from_age(on.years_since(birth).unwrap_or(0))
    }

    /// Label shown on reports
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::UnderEighteen => "Under 18",
            AgeGroup::EighteenToThirty => "18-30",
            AgeGroup::ThirtyOneToFifty => "31-50",
            AgeGroup::FiftyOnePlus => "51+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_band_edges() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::UnderEighteen);
        assert_eq!(AgeGroup::from_age(17), AgeGroup::UnderEighteen);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::EighteenToThirty);
        assert_eq!(AgeGroup::from_age(30), AgeGroup::EighteenToThirty);
        assert_eq!(AgeGroup::from_age(31), AgeGroup::ThirtyOneToFifty);
        assert_eq!(AgeGroup::from_age(50), AgeGroup::ThirtyOneToFifty);
        assert_eq!(AgeGroup::from_age(51), AgeGroup::FiftyOnePlus);
        assert_eq!(AgeGroup::from_age(90), AgeGroup::FiftyOnePlus);
    }

    #[test]
    fn test_age_from_birth_date() {
        let on = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        // Turns 18 the day of the visit
        let birth = NaiveDate::from_ymd_opt(2006, 6, 1).unwrap();
        assert_eq!(AgeGroup::from_birth_date(birth, on), AgeGroup::EighteenToThirty);

        // Turns 18 the day after
        let birth = NaiveDate::from_ymd_opt(2006, 6, 2).unwrap();
        assert_eq!(AgeGroup::from_birth_date(birth, on), AgeGroup::UnderEighteen);

        // Future birth date falls back to the youngest band
        let birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(AgeGroup::from_birth_date(birth, on), AgeGroup::UnderEighteen);
    }
}
