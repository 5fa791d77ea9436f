//! Report assembly
//!
//! The engine composes the specialized repository traits into the report
//! structures the dashboard consumes. Grouping that no single query
//! expresses alone (distinct visitors, peak day, age bands) happens here;
//! everything else is delegated to the repositories' grouped queries and
//! the shared ranking helpers.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use gatehouse_interfaces::{
    AttractionRepository, ClientRepository, OrderRepository, PaymentRepository,
    ServiceOfferingRepository, StorageError, StorageResult, TicketRepository, ZoneRepository,
};
use gatehouse_types::{
    AgeGroup, AgeGroupAttendance, AttendanceReport, AttractionSales, CategoryTotal,
    DailyRegistrations, DailySales, HourlyAttendance, PaymentMethodSales, SalesReport, UserReport,
};

use crate::stats;

/// Number of top spenders listed on the user report
const TOP_SPENDER_LIMIT: u32 = 10;

/// Length of the registration series window in days
const REGISTRATION_WINDOW_DAYS: u64 = 30;

/// The query surfaces the engine composes reports from
#[derive(Clone)]
pub struct ReportSources {
    pub clients: Arc<dyn ClientRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub attractions: Arc<dyn AttractionRepository>,
    pub zones: Arc<dyn ZoneRepository>,
    pub services: Arc<dyn ServiceOfferingRepository>,
}

/// Stateless report generator over a set of query sources
pub struct ReportEngine {
    sources: ReportSources,
}

impl ReportEngine {
    pub fn new(sources: ReportSources) -> Self {
        Self { sources }
    }

    fn validate_range(start: NaiveDate, end: NaiveDate) -> StorageResult<()> {
        if start > end {
            return Err(StorageError::Validation(format!(
                "invalid date range: start {start} is after end {end}"
            )));
        }
        Ok(())
    }

    fn validate_optional_range(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<()> {
        if let (Some(start), Some(end)) = (start, end) {
            Self::validate_range(start, end)?;
        }
        Ok(())
    }

    /// Sales figures over the inclusive date range
    pub async fn sales_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<SalesReport> {
        Self::validate_range(start, end)?;
        debug!(%start, %end, "generating sales report");

        let totals = self.sources.orders.sales_totals(Some(start), Some(end)).await?;
        let average_order_value = if totals.order_count > 0 {
            stats::round2(totals.revenue / totals.order_count as f64)
        } else {
            0.0
        };

        let daily = self
            .sources
            .orders
            .daily_sales(Some(start), Some(end))
            .await?
            .into_iter()
            .map(|row| DailySales {
                date: row.day,
                orders: row.orders,
                tickets: row.tickets,
                revenue: row.revenue,
            })
            .collect();

        // Attraction shares are taken against the report's total revenue,
        // not the breakdown's own sum.
        let mut attraction_rows = self
            .sources
            .orders
            .revenue_by_attraction(Some(start), Some(end))
            .await?;
        attraction_rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        let by_attraction = attraction_rows
            .into_iter()
            .map(|row| AttractionSales {
                percentage: stats::percentage_of(row.amount, totals.revenue),
                attraction: row.label,
                tickets: row.count,
                revenue: row.amount,
            })
            .collect();

        let mut payment_rows = self
            .sources
            .payments
            .method_breakdown(Some(start), Some(end))
            .await?;
        payment_rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        let captured_total: f64 = payment_rows.iter().map(|row| row.amount).sum();
        let by_payment_method = payment_rows
            .into_iter()
            .map(|row| PaymentMethodSales {
                percentage: stats::percentage_of(row.amount, captured_total),
                method: row.label,
                count: row.count,
                amount: row.amount,
            })
            .collect();

        Ok(SalesReport {
            start_date: start,
            end_date: end,
            total_orders: totals.order_count,
            total_tickets: totals.ticket_count,
            total_revenue: totals.revenue,
            average_order_value,
            daily,
            by_attraction,
            by_payment_method,
        })
    }

    /// Client-base figures anchored to the current instant
    pub async fn user_report(&self) -> StorageResult<UserReport> {
        self.user_report_at(Utc::now()).await
    }

    /// Client-base figures anchored to the given instant; the seam that
    /// keeps the calendar-month and 30-day windows testable
    pub async fn user_report_at(&self, now: DateTime<Utc>) -> StorageResult<UserReport> {
        let today = now.date_naive();
        debug!(%today, "generating user report");

        let total_users = self.sources.clients.count_all().await?;
        let active_users = self.sources.clients.count_active().await?;

        let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
        let new_this_month = self
            .sources
            .clients
            .count_created_since(month_start.and_time(NaiveTime::MIN).and_utc())
            .await?;

        let total_spent = self.sources.clients.total_spend().await?;
        let average_spend_per_user = if total_users > 0 {
            stats::round2(total_spent / total_users as f64)
        } else {
            0.0
        };

        let top_spenders = self.sources.clients.top_spenders(TOP_SPENDER_LIMIT).await?;

        let window_start = today
            .checked_sub_days(Days::new(REGISTRATION_WINDOW_DAYS - 1))
            .unwrap_or(today);
        let daily_registrations = self
            .sources
            .clients
            .registrations_per_day(window_start)
            .await?
            .into_iter()
            .map(|row| DailyRegistrations {
                date: row.day,
                count: row.count,
            })
            .collect();

        Ok(UserReport {
            total_users,
            active_users,
            new_this_month,
            average_spend_per_user,
            top_spenders,
            daily_registrations,
        })
    }

    /// Attendance figures over the inclusive date range
    pub async fn attendance_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<AttendanceReport> {
        Self::validate_range(start, end)?;
        debug!(%start, %end, "generating attendance report");

        let visits = self
            .sources
            .tickets
            .find_valid_visits(Some(start), Some(end))
            .await?;

        let mut visitors: HashSet<i32> = HashSet::new();
        let mut per_day: BTreeMap<NaiveDate, HashSet<i32>> = BTreeMap::new();
        let mut per_hour: BTreeMap<u32, HashSet<i32>> = BTreeMap::new();
        let mut per_band: HashMap<AgeGroup, u64> = HashMap::new();

        for visit in &visits {
            // Band each visitor once, from their first visit in range
            if visitors.insert(visit.client_id) {
                let band = AgeGroup::from_birth_date(visit.birth_date, visit.day);
                *per_band.entry(band).or_insert(0) += 1;
            }
            per_day.entry(visit.day).or_default().insert(visit.client_id);
            per_hour.entry(visit.hour).or_default().insert(visit.client_id);
        }

        let total_visitors = visitors.len() as u64;

        // Earliest day wins ties: per_day iterates date ascending
        let mut peak_day = None;
        let mut peak_day_visitors = 0u64;
        for (day, day_visitors) in &per_day {
            let count = day_visitors.len() as u64;
            if count > peak_day_visitors {
                peak_day_visitors = count;
                peak_day = Some(*day);
            }
        }

        let hourly = per_hour
            .iter()
            .map(|(hour, hour_visitors)| HourlyAttendance {
                hour: *hour,
                visitors: hour_visitors.len() as u64,
                percentage: stats::percentage_of(
                    hour_visitors.len() as f64,
                    total_visitors as f64,
                ),
            })
            .collect();

        let by_age_group = AgeGroup::ALL
            .iter()
            .map(|group| {
                let count = per_band.get(group).copied().unwrap_or(0);
                AgeGroupAttendance {
                    group: *group,
                    visitors: count,
                    percentage: stats::percentage_of(count as f64, total_visitors as f64),
                }
            })
            .collect();

        Ok(AttendanceReport {
            start_date: start,
            end_date: end,
            total_visitors,
            peak_day,
            peak_day_visitors,
            hourly,
            by_age_group,
        })
    }

    /// Ticket fare-class breakdown, count-ranked
    pub async fn ticket_type_stats(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<CategoryTotal>> {
        Self::validate_optional_range(start, end)?;
        let rows = self.sources.tickets.type_breakdown(start, end).await?;
        Ok(stats::ranked_by_count(rows))
    }

    /// Payment method breakdown, amount-ranked
    pub async fn payment_method_stats(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<CategoryTotal>> {
        Self::validate_optional_range(start, end)?;
        let rows = self.sources.payments.method_breakdown(start, end).await?;
        Ok(stats::ranked_by_amount(rows))
    }

    /// Visits per attraction, count-ranked
    pub async fn attraction_popularity(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<CategoryTotal>> {
        Self::validate_optional_range(start, end)?;
        let rows = self.sources.attractions.popularity(start, end).await?;
        Ok(stats::ranked_by_count(rows))
    }

    /// Visits per zone, count-ranked
    pub async fn zone_utilization(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<CategoryTotal>> {
        Self::validate_optional_range(start, end)?;
        let rows = self.sources.zones.utilization(start, end).await?;
        Ok(stats::ranked_by_count(rows))
    }

    /// Takings per venue service, amount-ranked
    pub async fn service_sales(&self) -> StorageResult<Vec<CategoryTotal>> {
        let rows = self.sources.services.sales_breakdown().await?;
        Ok(stats::ranked_by_amount(rows))
    }
}
