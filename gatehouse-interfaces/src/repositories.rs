//! Repository interfaces
//!
//! This module defines the repository traits that enable dependency
//! injection and testing through interface segregation. The generic
//! `CrudRepository` covers the table-agnostic surface; the per-entity
//! traits add the filtered queries, joins and grouped statistics that the
//! generic layer cannot express. The reporting engine consumes the
//! per-entity traits only, which keeps its test doubles small.
//!
//! Range-filtered query methods all follow the same optional-filter
//! pattern: a `start`/`end` pair narrows the query only when supplied,
//! otherwise the method returns the unfiltered aggregate. Orderings are
//! explicit and stable.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use gatehouse_types::{
    Attraction, Client, DailyCount, DailySalesRow, Employee, EmployeeRole, GroupedRow, Order,
    OrderStatus, Payment, SalesTotalsRow, ServiceOffering, Ticket, TopSpender, VisitRow, Zone,
};

use crate::StorageResult;

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> StorageResult<()>;
}

/// Generic CRUD repository trait
///
/// A missing row is a normal outcome: `find_by_id` returns `None` and
/// `update`/`delete` return `false` when zero rows were affected. Only
/// persistence faults surface as errors.
#[async_trait]
pub trait CrudRepository<T>: Repository {
    /// Select all rows of the bound table, persistence-layer default order
    async fn find_all(&self) -> StorageResult<Vec<T>>;

    /// Select one row by primary key
    async fn find_by_id(&self, id: i32) -> StorageResult<Option<T>>;

    /// Insert a new entity; returns it with the assigned primary key.
    /// Constraint violations propagate as errors.
    async fn create(&self, entity: T) -> StorageResult<T>;

    /// Replace all non-key fields, keyed by primary key; true iff exactly
    /// one row was affected
    async fn update(&self, entity: &T) -> StorageResult<bool>;

    /// Delete by primary key; same zero/one-row semantics as `update`
    async fn delete(&self, id: i32) -> StorageResult<bool>;

    /// Offset-based pagination, 1-based page number. `page == 0` or
    /// `per_page == 0` fails validation before any I/O.
    async fn find_page(&self, page: u32, per_page: u32) -> StorageResult<Vec<T>>;

    /// Total row count for the bound table
    async fn count(&self) -> StorageResult<u64>;
}

// =============================================================================
// Client Repository
// =============================================================================

/// Client query interface
#[async_trait]
pub trait ClientRepository: Repository {
    /// Find client by email
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Client>>;

    /// All active clients, ordered by name
    async fn find_active(&self) -> StorageResult<Vec<Client>>;

    /// Total registered clients
    async fn count_all(&self) -> StorageResult<u64>;

    /// Clients currently active
    async fn count_active(&self) -> StorageResult<u64>;

    /// Clients registered at or after the given instant
    async fn count_created_since(&self, since: DateTime<Utc>) -> StorageResult<u64>;

    /// Summed revenue of all paid/completed orders across the client base
    async fn total_spend(&self) -> StorageResult<f64>;

    /// Top clients by lifetime spend over paid/completed orders, descending
    async fn top_spenders(&self, limit: u32) -> StorageResult<Vec<TopSpender>>;

    /// Registration counts per calendar day since the given date, date
    /// ascending. Days without registrations are omitted.
    async fn registrations_per_day(&self, since: NaiveDate) -> StorageResult<Vec<DailyCount>>;
}

// =============================================================================
// Order Repository
// =============================================================================

/// Order query interface
#[async_trait]
pub trait OrderRepository: Repository {
    /// Scalar sales totals over paid/completed orders in range
    async fn sales_totals(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<SalesTotalsRow>;

    /// Per-day sales over paid/completed orders in range, date ascending
    async fn daily_sales(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<DailySalesRow>>;

    /// Ticket count and revenue per attraction over paid/completed orders
    /// in range, revenue descending
    async fn revenue_by_attraction(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>>;

    /// Orders with the given status, newest first
    async fn find_by_status(&self, status: OrderStatus) -> StorageResult<Vec<Order>>;

    /// Orders placed by a client, newest first
    async fn find_by_client(&self, client_id: i32) -> StorageResult<Vec<Order>>;
}

// =============================================================================
// Ticket Repository
// =============================================================================

/// Ticket query interface
#[async_trait]
pub trait TicketRepository: Repository {
    /// Confirmed/used visits in range joined to the visitor's birth date
    async fn find_valid_visits(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<VisitRow>>;

    /// Unused tickets whose validity ends before the given instant,
    /// soonest first
    async fn find_expiring_before(&self, cutoff: DateTime<Utc>) -> StorageResult<Vec<Ticket>>;

    /// Count and revenue per fare class in range, count descending
    async fn type_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>>;

    /// Mark a ticket used at the gate; true iff exactly one row was affected
    async fn mark_used(&self, id: i32) -> StorageResult<bool>;
}

// =============================================================================
// Payment Repository
// =============================================================================

/// Payment query interface
#[async_trait]
pub trait PaymentRepository: Repository {
    /// Count and amount per payment method in range, amount descending
    async fn method_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>>;

    /// Payments captured against an order, oldest first
    async fn find_by_order(&self, order_id: i32) -> StorageResult<Vec<Payment>>;
}

// =============================================================================
// Attraction / Zone / Service Repositories
// =============================================================================

/// Attraction query interface
#[async_trait]
pub trait AttractionRepository: Repository {
    /// Currently operating attractions, ordered by name
    async fn find_active(&self) -> StorageResult<Vec<Attraction>>;

    /// Attractions within a zone, ordered by name
    async fn find_by_zone(&self, zone_id: i32) -> StorageResult<Vec<Attraction>>;

    /// Visits and ticket revenue per attraction in range, count descending.
    /// Attractions without visits appear with zero counts.
    async fn popularity(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>>;

    /// Open or close an attraction; true iff exactly one row was affected
    async fn set_active(&self, id: i32, active: bool) -> StorageResult<bool>;
}

/// Zone query interface
#[async_trait]
pub trait ZoneRepository: Repository {
    /// Zones currently open, ordered by name
    async fn find_open(&self) -> StorageResult<Vec<Zone>>;

    /// Visits and ticket revenue per zone in range, count descending.
    /// Zones without visits appear with zero counts.
    async fn utilization(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>>;
}

/// Service offering query interface
#[async_trait]
pub trait ServiceOfferingRepository: Repository {
    /// Currently offered services, ordered by name
    async fn find_active(&self) -> StorageResult<Vec<ServiceOffering>>;

    /// Purchase count and takings per service, amount descending
    async fn sales_breakdown(&self) -> StorageResult<Vec<GroupedRow>>;

    /// Record one more purchase; true iff exactly one row was affected
    async fn increment_purchases(&self, id: i32) -> StorageResult<bool>;
}

// =============================================================================
// Employee Repository
// =============================================================================

/// Employee query interface
#[async_trait]
pub trait EmployeeRepository: Repository {
    /// Active roster, ordered by name
    async fn find_active(&self) -> StorageResult<Vec<Employee>>;

    /// Active staff with the given role, ordered by name
    async fn find_by_role(&self, role: EmployeeRole) -> StorageResult<Vec<Employee>>;
}
