//! Per-collection readers
//!
//! Each collection is read independently, ordered by its primary identifier
//! ascending. Rows map into the limebyte-core domain models; timestamps are
//! stored as epoch seconds and hydrate into `DateTime<Utc>`.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use chrono::{DateTime, Utc};
use limebyte_core::model::{Link, Post, SiteSettings, Subscriber, User};
use limebyte_core::Sensitive;
use rusqlite::{Connection, Row};

fn hydrate_timestamp(epoch: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch, 0).unwrap_or_else(Utc::now)
}

/// Load all users ordered by id
pub fn load_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare("SELECT id, username, password, display_name, created_at FROM users ORDER BY id")
        .map_err(|e| from_rusqlite("load_users", e))?;

    let rows = stmt
        .query_map([], |row: &Row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                password: Sensitive::new(row.get(2)?),
                display_name: row.get(3)?,
                created_at: hydrate_timestamp(row.get(4)?),
            })
        })
        .map_err(|e| from_rusqlite("load_users", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("load_users", e))?;

    Ok(rows)
}

/// Load all posts ordered by id
pub fn load_posts(conn: &Connection) -> Result<Vec<Post>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, subject, message, slug, author_id, view_count, pinned, created_at, updated_at
             FROM posts ORDER BY id",
        )
        .map_err(|e| from_rusqlite("load_posts", e))?;

    let rows = stmt
        .query_map([], |row: &Row| {
            let pinned: i64 = row.get(6)?;
            Ok(Post {
                id: row.get(0)?,
                subject: row.get(1)?,
                message: row.get(2)?,
                slug: row.get(3)?,
                author_id: row.get(4)?,
                view_count: row.get(5)?,
                pinned: pinned != 0,
                created_at: hydrate_timestamp(row.get(7)?),
                updated_at: hydrate_timestamp(row.get(8)?),
            })
        })
        .map_err(|e| from_rusqlite("load_posts", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("load_posts", e))?;

    Ok(rows)
}

/// Load all subscribers ordered by id
pub fn load_subscribers(conn: &Connection) -> Result<Vec<Subscriber>> {
    let mut stmt = conn
        .prepare("SELECT id, email, ip_address, created_at FROM subscribers ORDER BY id")
        .map_err(|e| from_rusqlite("load_subscribers", e))?;

    let rows = stmt
        .query_map([], |row: &Row| {
            Ok(Subscriber {
                id: row.get(0)?,
                email: row.get(1)?,
                ip_address: row.get(2)?,
                created_at: hydrate_timestamp(row.get(3)?),
            })
        })
        .map_err(|e| from_rusqlite("load_subscribers", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("load_subscribers", e))?;

    Ok(rows)
}

/// Load all links ordered by id
pub fn load_links(conn: &Connection) -> Result<Vec<Link>> {
    let mut stmt = conn
        .prepare("SELECT id, title, url, created_at FROM links ORDER BY id")
        .map_err(|e| from_rusqlite("load_links", e))?;

    let rows = stmt
        .query_map([], |row: &Row| {
            Ok(Link {
                id: row.get(0)?,
                title: row.get(1)?,
                url: row.get(2)?,
                created_at: hydrate_timestamp(row.get(3)?),
            })
        })
        .map_err(|e| from_rusqlite("load_links", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("load_links", e))?;

    Ok(rows)
}

/// Load all settings rows ordered by id
///
/// Only the singleton should exist, but export reads whatever is present
/// rather than assuming the invariant holds in a damaged store.
pub fn load_settings(conn: &Connection) -> Result<Vec<SiteSettings>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, site_title, footer_text, site_description, created_at, updated_at
             FROM settings ORDER BY id",
        )
        .map_err(|e| from_rusqlite("load_settings", e))?;

    let rows = stmt
        .query_map([], |row: &Row| {
            Ok(SiteSettings {
                id: row.get(0)?,
                site_title: row.get(1)?,
                footer_text: row.get(2)?,
                site_description: row.get(3)?,
                created_at: hydrate_timestamp(row.get(4)?),
                updated_at: hydrate_timestamp(row.get(5)?),
            })
        })
        .map_err(|e| from_rusqlite("load_settings", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("load_settings", e))?;

    Ok(rows)
}
