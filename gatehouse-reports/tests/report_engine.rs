//! Report engine scenarios against mocked query sources
//!
//! Mocks with no configured expectations panic when called, so the
//! validation tests double as proof that no query is issued on a
//! rejected request.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mockall::mock;
use mockall::predicate::eq;

use gatehouse_interfaces::{
    AttractionRepository, ClientRepository, OrderRepository, PaymentRepository, Repository,
    ServiceOfferingRepository, StorageError, StorageResult, TicketRepository, ZoneRepository,
};
use gatehouse_reports::{ReportEngine, ReportSources};
use gatehouse_types::{
    AgeGroup, Attraction, Client, DailyCount, DailySalesRow, GroupedRow, Order, OrderStatus,
    Payment, SalesTotalsRow, ServiceOffering, Ticket, TopSpender, VisitRow, Zone,
};

mock! {
    Clients {}

    #[async_trait]
    impl Repository for Clients {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl ClientRepository for Clients {
        async fn find_by_email(&self, email: &str) -> StorageResult<Option<Client>>;
        async fn find_active(&self) -> StorageResult<Vec<Client>>;
        async fn count_all(&self) -> StorageResult<u64>;
        async fn count_active(&self) -> StorageResult<u64>;
        async fn count_created_since(&self, since: DateTime<Utc>) -> StorageResult<u64>;
        async fn total_spend(&self) -> StorageResult<f64>;
        async fn top_spenders(&self, limit: u32) -> StorageResult<Vec<TopSpender>>;
        async fn registrations_per_day(&self, since: NaiveDate) -> StorageResult<Vec<DailyCount>>;
    }
}

mock! {
    Orders {}

    #[async_trait]
    impl Repository for Orders {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl OrderRepository for Orders {
        async fn sales_totals(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<SalesTotalsRow>;
        async fn daily_sales(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<DailySalesRow>>;
        async fn revenue_by_attraction(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<GroupedRow>>;
        async fn find_by_status(&self, status: OrderStatus) -> StorageResult<Vec<Order>>;
        async fn find_by_client(&self, client_id: i32) -> StorageResult<Vec<Order>>;
    }
}

mock! {
    Tickets {}

    #[async_trait]
    impl Repository for Tickets {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl TicketRepository for Tickets {
        async fn find_valid_visits(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<VisitRow>>;
        async fn find_expiring_before(&self, cutoff: DateTime<Utc>) -> StorageResult<Vec<Ticket>>;
        async fn type_breakdown(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<GroupedRow>>;
        async fn mark_used(&self, id: i32) -> StorageResult<bool>;
    }
}

mock! {
    Payments {}

    #[async_trait]
    impl Repository for Payments {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl PaymentRepository for Payments {
        async fn method_breakdown(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<GroupedRow>>;
        async fn find_by_order(&self, order_id: i32) -> StorageResult<Vec<Payment>>;
    }
}

mock! {
    Attractions {}

    #[async_trait]
    impl Repository for Attractions {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl AttractionRepository for Attractions {
        async fn find_active(&self) -> StorageResult<Vec<Attraction>>;
        async fn find_by_zone(&self, zone_id: i32) -> StorageResult<Vec<Attraction>>;
        async fn popularity(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<GroupedRow>>;
        async fn set_active(&self, id: i32, active: bool) -> StorageResult<bool>;
    }
}

mock! {
    Zones {}

    #[async_trait]
    impl Repository for Zones {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl ZoneRepository for Zones {
        async fn find_open(&self) -> StorageResult<Vec<Zone>>;
        async fn utilization(
            &self,
            start: Option<NaiveDate>,
            end: Option<NaiveDate>,
        ) -> StorageResult<Vec<GroupedRow>>;
    }
}

mock! {
    Services {}

    #[async_trait]
    impl Repository for Services {
        async fn health_check(&self) -> StorageResult<()>;
    }

    #[async_trait]
    impl ServiceOfferingRepository for Services {
        async fn find_active(&self) -> StorageResult<Vec<ServiceOffering>>;
        async fn sales_breakdown(&self) -> StorageResult<Vec<GroupedRow>>;
        async fn increment_purchases(&self, id: i32) -> StorageResult<bool>;
    }
}

struct Mocks {
    clients: MockClients,
    orders: MockOrders,
    tickets: MockTickets,
    payments: MockPayments,
    attractions: MockAttractions,
    zones: MockZones,
    services: MockServices,
}

impl Mocks {
    fn new() -> Self {
        Self {
            clients: MockClients::new(),
            orders: MockOrders::new(),
            tickets: MockTickets::new(),
            payments: MockPayments::new(),
            attractions: MockAttractions::new(),
            zones: MockZones::new(),
            services: MockServices::new(),
        }
    }

    fn into_engine(self) -> ReportEngine {
        ReportEngine::new(ReportSources {
            clients: Arc::new(self.clients),
            orders: Arc::new(self.orders),
            tickets: Arc::new(self.tickets),
            payments: Arc::new(self.payments),
            attractions: Arc::new(self.attractions),
            zones: Arc::new(self.zones),
            services: Arc::new(self.services),
        })
    }
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn grouped(label: &str, count: u64, amount: f64) -> GroupedRow {
    GroupedRow {
        label: label.to_string(),
        count,
        amount,
    }
}

fn visit(client_id: i32, day: NaiveDate, hour: u32, birth: NaiveDate) -> VisitRow {
    VisitRow {
        client_id,
        day,
        hour,
        birth_date: birth,
    }
}

// Two paid orders of 1000 and 2000 in March; the cancelled 500 order is
// already excluded by the repository query the totals row stands in for.
#[tokio::test]
async fn sales_report_computes_scalar_totals() {
    let start = d(2024, 3, 1);
    let end = d(2024, 3, 31);

    let mut mocks = Mocks::new();
    mocks
        .orders
        .expect_sales_totals()
        .with(eq(Some(start)), eq(Some(end)))
        .returning(|_, _| {
            Ok(SalesTotalsRow {
                order_count: 2,
                ticket_count: 5,
                revenue: 3000.0,
            })
        });
    mocks.orders.expect_daily_sales().returning(|_, _| {
        Ok(vec![
            DailySalesRow {
                day: d(2024, 3, 5),
                orders: 1,
                tickets: 2,
                revenue: 1000.0,
            },
            DailySalesRow {
                day: d(2024, 3, 12),
                orders: 1,
                tickets: 3,
                revenue: 2000.0,
            },
        ])
    });
    mocks
        .orders
        .expect_revenue_by_attraction()
        .returning(|_, _| Ok(vec![grouped("Drop Tower", 5, 3000.0)]));
    mocks
        .payments
        .expect_method_breakdown()
        .returning(|_, _| Ok(vec![grouped("card", 2, 3000.0)]));

    let report = mocks.into_engine().sales_report(start, end).await.unwrap();

    assert_eq!(report.total_orders, 2);
    assert_eq!(report.total_tickets, 5);
    assert_eq!(report.total_revenue, 3000.0);
    assert_eq!(report.average_order_value, 1500.0);
    assert_eq!(report.daily.len(), 2);
    assert!(report.daily[0].date < report.daily[1].date);
}

#[tokio::test]
async fn sales_report_attraction_percentages_close_over_total_revenue() {
    let start = d(2024, 3, 1);
    let end = d(2024, 3, 31);

    let mut mocks = Mocks::new();
    mocks.orders.expect_sales_totals().returning(|_, _| {
        Ok(SalesTotalsRow {
            order_count: 4,
            ticket_count: 10,
            revenue: 1000.0,
        })
    });
    mocks.orders.expect_daily_sales().returning(|_, _| Ok(Vec::new()));
    mocks.orders.expect_revenue_by_attraction().returning(|_, _| {
        Ok(vec![
            grouped("Carousel", 2, 200.0),
            grouped("Drop Tower", 5, 500.0),
            grouped("Ghost Train", 3, 300.0),
        ])
    });
    mocks
        .payments
        .expect_method_breakdown()
        .returning(|_, _| Ok(Vec::new()));

    let report = mocks.into_engine().sales_report(start, end).await.unwrap();

    // Revenue descending with shares of the 1000.0 total
    let names: Vec<&str> = report
        .by_attraction
        .iter()
        .map(|entry| entry.attraction.as_str())
        .collect();
    assert_eq!(names, ["Drop Tower", "Ghost Train", "Carousel"]);
    assert_eq!(report.by_attraction[0].percentage, 50.0);

    let sum: f64 = report.by_attraction.iter().map(|entry| entry.percentage).sum();
    assert!((sum - 100.0).abs() < 0.01);
}

#[tokio::test]
async fn sales_report_zero_revenue_yields_zero_percentages() {
    let start = d(2024, 3, 1);
    let end = d(2024, 3, 31);

    let mut mocks = Mocks::new();
    mocks.orders.expect_sales_totals().returning(|_, _| {
        Ok(SalesTotalsRow {
            order_count: 0,
            ticket_count: 0,
            revenue: 0.0,
        })
    });
    mocks.orders.expect_daily_sales().returning(|_, _| Ok(Vec::new()));
    mocks
        .orders
        .expect_revenue_by_attraction()
        .returning(|_, _| Ok(vec![grouped("Carousel", 2, 0.0)]));
    mocks
        .payments
        .expect_method_breakdown()
        .returning(|_, _| Ok(vec![grouped("voucher", 1, 0.0)]));

    let report = mocks.into_engine().sales_report(start, end).await.unwrap();

    assert_eq!(report.average_order_value, 0.0);
    assert_eq!(report.by_attraction[0].percentage, 0.0);
    assert_eq!(report.by_payment_method[0].percentage, 0.0);
}

#[tokio::test]
async fn sales_report_rejects_inverted_range_before_querying() {
    // No expectations configured: any repository call would panic
    let engine = Mocks::new().into_engine();

    let result = engine.sales_report(d(2024, 3, 31), d(2024, 3, 1)).await;

    assert!(matches!(result, Err(StorageError::Validation(_))));
}

#[tokio::test]
async fn sales_report_orders_payment_methods_by_amount() {
    let start = d(2024, 3, 1);
    let end = d(2024, 3, 31);

    let mut mocks = Mocks::new();
    mocks.orders.expect_sales_totals().returning(|_, _| {
        Ok(SalesTotalsRow {
            order_count: 3,
            ticket_count: 6,
            revenue: 1000.0,
        })
    });
    mocks.orders.expect_daily_sales().returning(|_, _| Ok(Vec::new()));
    mocks
        .orders
        .expect_revenue_by_attraction()
        .returning(|_, _| Ok(Vec::new()));
    // Deliberately unsorted input
    mocks.payments.expect_method_breakdown().returning(|_, _| {
        Ok(vec![grouped("cash", 1, 300.0), grouped("card", 2, 700.0)])
    });

    let report = mocks.into_engine().sales_report(start, end).await.unwrap();

    assert_eq!(report.by_payment_method[0].method, "card");
    assert_eq!(report.by_payment_method[0].percentage, 70.0);
    assert_eq!(report.by_payment_method[1].method, "cash");
    assert_eq!(report.by_payment_method[1].percentage, 30.0);
}

#[tokio::test]
async fn sales_report_propagates_repository_failure() {
    let mut mocks = Mocks::new();
    mocks
        .orders
        .expect_sales_totals()
        .returning(|_, _| Err(StorageError::Connection("pool exhausted".to_string())));

    let result = mocks
        .into_engine()
        .sales_report(d(2024, 3, 1), d(2024, 3, 31))
        .await;

    assert!(matches!(result, Err(StorageError::Connection(_))));
}

#[tokio::test]
async fn attendance_report_buckets_visitors_into_fixed_age_bands() {
    let start = d(2024, 6, 1);
    let end = d(2024, 6, 30);
    let day = d(2024, 6, 15);

    let mut mocks = Mocks::new();
    mocks.tickets.expect_find_valid_visits().returning(move |_, _| {
        Ok(vec![
            visit(1, day, 10, d(2014, 1, 20)), // 10
            visit(2, day, 11, d(1999, 3, 5)),  // 25
            visit(3, day, 12, d(1979, 2, 1)),  // 45
            visit(4, day, 13, d(1964, 4, 2)),  // 60
        ])
    });

    let report = mocks
        .into_engine()
        .attendance_report(start, end)
        .await
        .unwrap();

    assert_eq!(report.total_visitors, 4);
    let bands: Vec<AgeGroup> = report.by_age_group.iter().map(|entry| entry.group).collect();
    assert_eq!(bands, AgeGroup::ALL);
    for entry in &report.by_age_group {
        assert_eq!(entry.visitors, 1);
        assert_eq!(entry.percentage, 25.0);
    }
}

#[tokio::test]
async fn attendance_report_peak_day_and_hourly_breakdown() {
    let start = d(2024, 6, 1);
    let end = d(2024, 6, 30);
    let busy = d(2024, 6, 8);
    let quiet = d(2024, 6, 9);

    let mut mocks = Mocks::new();
    mocks.tickets.expect_find_valid_visits().returning(move |_, _| {
        Ok(vec![
            visit(1, busy, 10, d(1990, 1, 1)),
            visit(2, busy, 10, d(1992, 1, 1)),
            visit(3, quiet, 14, d(1994, 1, 1)),
        ])
    });

    let report = mocks
        .into_engine()
        .attendance_report(start, end)
        .await
        .unwrap();

    assert_eq!(report.total_visitors, 3);
    assert_eq!(report.peak_day, Some(busy));
    assert_eq!(report.peak_day_visitors, 2);

    // Hours without visits are omitted
    let hours: Vec<u32> = report.hourly.iter().map(|entry| entry.hour).collect();
    assert_eq!(hours, [10, 14]);
    assert_eq!(report.hourly[0].visitors, 2);
    assert_eq!(report.hourly[0].percentage, 66.67);
    assert_eq!(report.hourly[1].percentage, 33.33);
}

#[tokio::test]
async fn attendance_report_empty_range() {
    let mut mocks = Mocks::new();
    mocks
        .tickets
        .expect_find_valid_visits()
        .returning(|_, _| Ok(Vec::new()));

    let report = mocks
        .into_engine()
        .attendance_report(d(2024, 6, 1), d(2024, 6, 30))
        .await
        .unwrap();

    assert_eq!(report.total_visitors, 0);
    assert_eq!(report.peak_day, None);
    assert_eq!(report.peak_day_visitors, 0);
    assert!(report.hourly.is_empty());
    assert_eq!(report.by_age_group.len(), 4);
    assert!(report.by_age_group.iter().all(|entry| entry.percentage == 0.0));
}

#[tokio::test]
async fn attendance_report_rejects_inverted_range() {
    let engine = Mocks::new().into_engine();

    let result = engine.attendance_report(d(2024, 6, 30), d(2024, 6, 1)).await;

    assert!(matches!(result, Err(StorageError::Validation(_))));
}

#[tokio::test]
async fn user_report_windows_anchor_to_the_given_instant() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let month_start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    let mut mocks = Mocks::new();
    mocks.clients.expect_count_all().returning(|| Ok(50));
    mocks.clients.expect_count_active().returning(|| Ok(40));
    mocks
        .clients
        .expect_count_created_since()
        .with(eq(month_start))
        .returning(|_| Ok(5));
    mocks.clients.expect_total_spend().returning(|| Ok(5000.0));
    mocks
        .clients
        .expect_top_spenders()
        .with(eq(10))
        .returning(|_| {
            Ok(vec![TopSpender {
                client_id: 3,
                full_name: "Big Spender".to_string(),
                order_count: 12,
                total_spent: 900.0,
            }])
        });
    mocks
        .clients
        .expect_registrations_per_day()
        .with(eq(d(2024, 5, 17)))
        .returning(|_| {
            Ok(vec![
                DailyCount {
                    day: d(2024, 5, 20),
                    count: 3,
                },
                DailyCount {
                    day: d(2024, 6, 1),
                    count: 2,
                },
            ])
        });

    let report = mocks.into_engine().user_report_at(now).await.unwrap();

    assert_eq!(report.total_users, 50);
    assert_eq!(report.active_users, 40);
    assert_eq!(report.new_this_month, 5);
    assert_eq!(report.average_spend_per_user, 100.0);
    assert_eq!(report.top_spenders.len(), 1);
}

// Pins the series shape: days without registrations stay absent rather
// than being zero-filled.
#[tokio::test]
async fn user_report_omits_empty_registration_days() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    let mut mocks = Mocks::new();
    mocks.clients.expect_count_all().returning(|| Ok(10));
    mocks.clients.expect_count_active().returning(|| Ok(10));
    mocks
        .clients
        .expect_count_created_since()
        .returning(|_| Ok(2));
    mocks.clients.expect_total_spend().returning(|| Ok(0.0));
    mocks.clients.expect_top_spenders().returning(|_| Ok(Vec::new()));
    mocks
        .clients
        .expect_registrations_per_day()
        .returning(|_| {
            Ok(vec![
                DailyCount {
                    day: d(2024, 5, 20),
                    count: 1,
                },
                DailyCount {
                    day: d(2024, 6, 10),
                    count: 4,
                },
            ])
        });

    let report = mocks.into_engine().user_report_at(now).await.unwrap();

    let dates: Vec<NaiveDate> = report
        .daily_registrations
        .iter()
        .map(|entry| entry.date)
        .collect();
    assert_eq!(dates, [d(2024, 5, 20), d(2024, 6, 10)]);
}

#[tokio::test]
async fn user_report_zero_clients_zero_average() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    let mut mocks = Mocks::new();
    mocks.clients.expect_count_all().returning(|| Ok(0));
    mocks.clients.expect_count_active().returning(|| Ok(0));
    mocks
        .clients
        .expect_count_created_since()
        .returning(|_| Ok(0));
    mocks.clients.expect_total_spend().returning(|| Ok(0.0));
    mocks.clients.expect_top_spenders().returning(|_| Ok(Vec::new()));
    mocks
        .clients
        .expect_registrations_per_day()
        .returning(|_| Ok(Vec::new()));

    let report = mocks.into_engine().user_report_at(now).await.unwrap();

    assert_eq!(report.average_spend_per_user, 0.0);
}

#[tokio::test]
async fn ticket_type_stats_rank_by_count() {
    let mut mocks = Mocks::new();
    mocks.tickets.expect_type_breakdown().returning(|_, _| {
        Ok(vec![
            grouped("child", 3, 90.0),
            grouped("standard", 5, 250.0),
        ])
    });

    let stats = mocks
        .into_engine()
        .ticket_type_stats(None, None)
        .await
        .unwrap();

    assert_eq!(stats[0].label, "standard");
    assert_eq!(stats[0].percentage, 62.5);
    assert_eq!(stats[1].label, "child");
    assert_eq!(stats[1].percentage, 37.5);
}

#[tokio::test]
async fn zone_utilization_rejects_inverted_optional_range() {
    let engine = Mocks::new().into_engine();

    let result = engine
        .zone_utilization(Some(d(2024, 6, 30)), Some(d(2024, 6, 1)))
        .await;

    assert!(matches!(result, Err(StorageError::Validation(_))));
}

#[tokio::test]
async fn service_sales_rank_by_amount() {
    let mut mocks = Mocks::new();
    mocks.services.expect_sales_breakdown().returning(|| {
        Ok(vec![
            grouped("Lockers", 40, 200.0),
            grouped("Parking", 30, 450.0),
        ])
    });

    let stats = mocks.into_engine().service_sales().await.unwrap();

    assert_eq!(stats[0].label, "Parking");
    assert_eq!(stats[1].label, "Lockers");
    let sum: f64 = stats.iter().map(|entry| entry.percentage).sum();
    assert!((sum - 100.0).abs() < 0.01);
}
