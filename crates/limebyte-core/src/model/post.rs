use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::BOOTSTRAP_ADMIN_ID;

/// A blog post
///
/// Posts are addressed by `slug`, which is unique and immutable once
/// assigned: a restore may update every other mutable field of an existing
/// post but never rewrites the slug or the creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Row identifier
    pub id: i64,

    /// Post title
    pub subject: String,

    /// Post body
    pub message: String,

    /// URL-stable unique key
    pub slug: Option<String>,

    /// Owning user; defaults to the bootstrap administrator
    pub author_id: i64,

    /// Number of reads
    pub view_count: i64,

    /// Pinned posts sort before unpinned ones
    pub pinned: bool,

    /// Timestamp when this post was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this post was last updated
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by the bootstrap administrator
    pub fn new(id: i64, subject: String, message: String, slug: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            subject,
            message,
            slug,
            author_id: BOOTSTRAP_ADMIN_ID,
            view_count: 0,
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }
}
