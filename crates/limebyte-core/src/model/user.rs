use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sensitive::Sensitive;

/// The identity of the bootstrap administrator
///
/// Imported rows without an owner reference fall back to this user, and the
/// users collection is never cleared during a restore so this identity always
/// survives one.
pub const BOOTSTRAP_ADMIN_ID: i64 = 1;

/// An account that can author posts
///
/// Users are read during export (so a backup is complete) but are never
/// destructively modified by import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Row identifier
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Credential hash; redacted from Debug output
    pub password: Sensitive<String>,

    /// Optional human-facing name shown on posts
    pub display_name: Option<String>,

    /// Timestamp when this account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with current timestamp
    pub fn new(id: i64, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password: Sensitive::new(password_hash),
            display_name: None,
            created_at: Utc::now(),
        }
    }

    /// Whether this is the bootstrap administrator
    pub fn is_bootstrap_admin(&self) -> bool {
        self.id == BOOTSTRAP_ADMIN_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(1, "admin".to_string(), "$2b$10$x".to_string());
        assert_eq!(user.username, "admin");
        assert!(user.is_bootstrap_admin());
        assert!(user.display_name.is_none());
    }

    #[test]
    fn test_debug_hides_credential() {
        let user = User::new(2, "alice".to_string(), "$2b$10$secret".to_string());
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("alice"));
        assert!(!debug_str.contains("secret"));
    }
}
