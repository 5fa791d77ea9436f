//! Table bindings for the domain entities
//!
//! The field-descriptor tables the generic repository is driven by. The
//! column lists must stay in sync with the entity structs in
//! `gatehouse-types`; the primary key is never part of the write set.

use gatehouse_types::{
    Attraction, Client, Employee, Order, Payment, ServiceOffering, Ticket, Zone,
};

use crate::record::Record;

impl Record for Client {
    const TABLE: &'static str = "clients";
    const COLUMNS: &'static [&'static str] = &[
        "full_name",
        "email",
        "date_of_birth",
        "is_active",
        "created_at",
    ];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Employee {
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &["full_name", "role", "hired_at", "is_active"];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Zone {
    const TABLE: &'static str = "zones";
    const COLUMNS: &'static [&'static str] = &["name", "capacity", "is_open"];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Attraction {
    const TABLE: &'static str = "attractions";
    const COLUMNS: &'static [&'static str] =
        &["zone_id", "name", "ticket_price", "min_age", "is_active"];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for ServiceOffering {
    const TABLE: &'static str = "service_offerings";
    const COLUMNS: &'static [&'static str] = &["name", "price", "purchase_count", "is_active"];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Order {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "uuid",
        "client_id",
        "status",
        "total_amount",
        "ticket_count",
        "created_at",
    ];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Ticket {
    const TABLE: &'static str = "tickets";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "client_id",
        "attraction_id",
        "ticket_type",
        "price",
        "status",
        "visit_at",
        "valid_until",
    ];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Record for Payment {
    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &["order_id", "method", "amount", "paid_at"];

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_exclude_primary_key() {
        assert!(!Client::COLUMNS.contains(&Client::PRIMARY_KEY));
        assert!(!Order::COLUMNS.contains(&Order::PRIMARY_KEY));
        assert!(!Ticket::COLUMNS.contains(&Ticket::PRIMARY_KEY));
        assert!(!Payment::COLUMNS.contains(&Payment::PRIMARY_KEY));
    }

    #[test]
    fn test_descriptor_columns_match_serde_fields() {
        let order = gatehouse_types::Order::new(1, 100.0, 2);
        let row = serde_json::to_value(&order).unwrap();
        let map = row.as_object().unwrap();

        for column in Order::COLUMNS {
            assert!(map.contains_key(*column), "missing column {column}");
        }
        // primary key plus writable columns account for every field
        assert_eq!(map.len(), Order::COLUMNS.len() + 1);
    }
}
