//! Test doubles and fixtures for the storage layer
//!
//! `InMemoryProvider` executes the generic repository's statement shapes
//! against JSON row tables, which is enough to exercise the whole CRUD
//! surface without a database. `RecordingProvider` is a scripted double
//! for asserting the exact SQL and parameters a repository emits. The
//! builders produce deterministic entity fixtures.

pub mod builders;
pub mod memory;
pub mod recording;

pub use builders::{
    AttractionBuilder, ClientBuilder, OrderBuilder, PaymentBuilder, TicketBuilder, ZoneBuilder,
};
pub use memory::InMemoryProvider;
pub use recording::{CannedResponse, RecordingProvider};
