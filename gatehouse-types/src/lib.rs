//! Unified domain types for Gatehouse
//!
//! This crate holds the plain domain records shared by the storage layer,
//! the reporting engine, and the presentation adapters. Entities are serde
//! records with integer primary keys assigned by the persistence layer;
//! report results are non-persisted value objects owned by the caller.

pub mod entities;
pub mod reports;
pub mod rows;

// Entity re-exports
pub use entities::{
    attraction::Attraction,
    client::Client,
    employee::{Employee, EmployeeRole},
    order::{Order, OrderStatus},
    payment::{Payment, PaymentMethod},
    service_offering::ServiceOffering,
    ticket::{Ticket, TicketStatus, TicketType},
    zone::Zone,
};

// Report re-exports
pub use reports::{
    AgeGroup, AgeGroupAttendance, AttendanceReport, AttractionSales, DailyRegistrations,
    DailySales, HourlyAttendance, PaymentMethodSales, SalesReport, TopSpender, UserReport,
};

// Query row re-exports
pub use rows::{CategoryTotal, DailyCount, DailySalesRow, GroupedRow, SalesTotalsRow, VisitRow};
