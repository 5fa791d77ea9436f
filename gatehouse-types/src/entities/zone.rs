//! Zone entity definition

use serde::{Deserialize, Serialize};

/// A physical area of the venue grouping attractions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Primary key
    pub id: i32,

    /// Zone name shown on maps and reports
    pub name: String,

    /// Maximum simultaneous visitors
    pub capacity: u32,

    /// Whether the zone is currently open to visitors
    pub is_open: bool,
}

impl Zone {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            capacity,
            is_open: true,
        }
    }
}
