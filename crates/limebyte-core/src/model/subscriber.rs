use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newsletter subscriber, unique by email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Row identifier
    pub id: i64,

    /// Unique subscription address
    pub email: String,

    /// Address the subscription request came from
    pub ip_address: Option<String>,

    /// Timestamp when the subscription was created
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    /// Create a new subscriber record with current timestamp
    pub fn new(id: i64, email: String) -> Self {
        Self {
            id,
            email,
            ip_address: None,
            created_at: Utc::now(),
        }
    }
}
