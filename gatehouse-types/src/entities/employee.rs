//! Employee entity definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff member on the venue schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key
    pub id: i32,

    /// Display name
    pub full_name: String,

    /// Scheduling role
    pub role: EmployeeRole,

    /// When the employee was hired
    pub hired_at: DateTime<Utc>,

    /// Whether the employee is on the active roster
    pub is_active: bool,
}

/// Staff roles used by the scheduling screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Manager,
    Cashier,
    Operator,
    Maintenance,
}

impl EmployeeRole {
    /// Column value as stored by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Manager => "manager",
            EmployeeRole::Cashier => "cashier",
            EmployeeRole::Operator => "operator",
            EmployeeRole::Maintenance => "maintenance",
        }
    }
}

impl Employee {
    /// Create a new employee pending persistence
    pub fn new(full_name: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            id: 0,
            full_name: full_name.into(),
            role,
            hired_at: Utc::now(),
            is_active: true,
        }
    }
}
