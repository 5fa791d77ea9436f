//! Builder pattern utilities for creating test entities
//!
//! Deterministic fixtures: every default is a fixed value so tests never
//! depend on the wall clock.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use gatehouse_types::{
    Attraction, Client, Order, OrderStatus, Payment, PaymentMethod, Ticket, TicketStatus,
    TicketType, Zone,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builder pattern for creating test clients
pub struct ClientBuilder {
    client: Client,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            client: Client {
                id: 0,
                full_name: "Test Client".to_string(),
                email: "client@example.com".to_string(),
                date_of_birth: date(1990, 5, 10),
                is_active: true,
                created_at: ts(2024, 1, 15, 10, 0),
            },
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.client.id = id;
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.client.full_name = full_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.client.email = email.into();
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.client.date_of_birth = date_of_birth;
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.client.is_active = is_active;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.client.created_at = created_at;
        self
    }

    pub fn build(self) -> Client {
        self.client
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating test orders
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            order: Order {
                id: 0,
                uuid: Uuid::new_v4(),
                client_id: 1,
                status: OrderStatus::Paid,
                total_amount: 100.0,
                ticket_count: 2,
                created_at: ts(2024, 3, 10, 12, 0),
            },
        }
    }

    pub fn with_client_id(mut self, client_id: i32) -> Self {
        self.order.client_id = client_id;
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.order.status = status;
        self
    }

    pub fn with_total_amount(mut self, total_amount: f64) -> Self {
        self.order.total_amount = total_amount;
        self
    }

    pub fn with_ticket_count(mut self, ticket_count: u32) -> Self {
        self.order.ticket_count = ticket_count;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.order.created_at = created_at;
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new() -> Self {
        Self {
            ticket: Ticket {
                id: 0,
                order_id: 1,
                client_id: 1,
                attraction_id: 1,
                ticket_type: TicketType::Standard,
                price: 50.0,
                status: TicketStatus::Confirmed,
                visit_at: ts(2024, 3, 10, 14, 0),
                valid_until: ts(2024, 3, 10, 23, 0),
            },
        }
    }

    pub fn with_order_id(mut self, order_id: i32) -> Self {
        self.ticket.order_id = order_id;
        self
    }

    pub fn with_client_id(mut self, client_id: i32) -> Self {
        self.ticket.client_id = client_id;
        self
    }

    pub fn with_attraction_id(mut self, attraction_id: i32) -> Self {
        self.ticket.attraction_id = attraction_id;
        self
    }

    pub fn with_ticket_type(mut self, ticket_type: TicketType) -> Self {
        self.ticket.ticket_type = ticket_type;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.ticket.price = price;
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn with_visit_at(mut self, visit_at: DateTime<Utc>) -> Self {
        self.ticket.visit_at = visit_at;
        self
    }

    pub fn with_valid_until(mut self, valid_until: DateTime<Utc>) -> Self {
        self.ticket.valid_until = valid_until;
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

impl Default for TicketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating test payments
pub struct PaymentBuilder {
    payment: Payment,
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            payment: Payment {
                id: 0,
                order_id: 1,
                method: PaymentMethod::Card,
                amount: 100.0,
                paid_at: ts(2024, 3, 10, 12, 5),
            },
        }
    }

    pub fn with_order_id(mut self, order_id: i32) -> Self {
        self.payment.order_id = order_id;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.payment.method = method;
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.payment.amount = amount;
        self
    }

    pub fn build(self) -> Payment {
        self.payment
    }
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating test attractions
pub struct AttractionBuilder {
    attraction: Attraction,
}

impl AttractionBuilder {
    pub fn new() -> Self {
        Self {
            attraction: Attraction {
                id: 0,
                zone_id: 1,
                name: "Test Attraction".to_string(),
                ticket_price: 25.0,
                min_age: None,
                is_active: true,
            },
        }
    }

    pub fn with_zone_id(mut self, zone_id: i32) -> Self {
        self.attraction.zone_id = zone_id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attraction.name = name.into();
        self
    }

    pub fn with_ticket_price(mut self, ticket_price: f64) -> Self {
        self.attraction.ticket_price = ticket_price;
        self
    }

    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.attraction.min_age = Some(min_age);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.attraction.is_active = is_active;
        self
    }

    pub fn build(self) -> Attraction {
        self.attraction
    }
}

impl Default for AttractionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating test zones
pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            zone: Zone {
                id: 0,
                name: "Test Zone".to_string(),
                capacity: 100,
                is_open: true,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.zone.name = name.into();
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.zone.capacity = capacity;
        self
    }

    pub fn with_is_open(mut self, is_open: bool) -> Self {
        self.zone.is_open = is_open;
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}

impl Default for ZoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
