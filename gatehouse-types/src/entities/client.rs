//! Client entity definition

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered visitor account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Primary key
    pub id: i32,

    /// Display name
    pub full_name: String,

    /// Contact email, unique per client
    pub email: String,

    /// Date of birth, used for age-band reporting
    pub date_of_birth: NaiveDate,

    /// Whether the account can currently buy tickets
    pub is_active: bool,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Create a new client pending persistence (id assigned on insert)
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            full_name: full_name.into(),
            email: email.into(),
            date_of_birth,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
