//! Domain entity definitions
//!
//! One module per persisted table. Every entity carries an integer primary
//! key that is 0 until the persistence layer assigns it on insert; column
//! names equal the serde field names (snake_case).

pub mod attraction;
pub mod client;
pub mod employee;
pub mod order;
pub mod payment;
pub mod service_offering;
pub mod ticket;
pub mod zone;
