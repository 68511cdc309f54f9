use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sidebar link; carries no uniqueness constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Row identifier
    pub id: i64,

    /// Display title
    pub title: String,

    /// Target URL
    pub url: String,

    /// Timestamp when this link was created
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Create a new link record with current timestamp
    pub fn new(id: i64, title: String, url: String) -> Self {
        Self {
            id,
            title,
            url,
            created_at: Utc::now(),
        }
    }
}
