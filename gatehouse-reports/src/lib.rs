//! Reporting engine for Gatehouse
//!
//! Assembles the sales, user and attendance reports plus the grouped
//! statistics breakdowns by composing the specialized repository traits
//! from `gatehouse-interfaces`. Every report method is a pure function of
//! its inputs over a committed data snapshot: no state persists across
//! calls, invalid ranges fail before any query is issued, and repository
//! failures propagate unchanged — partial reports are never returned.

pub mod engine;
pub mod stats;

pub use engine::{ReportEngine, ReportSources};
