//! Importer
//!
//! Applies a validated snapshot document to the store as one atomic
//! transaction: clear the replaceable collections, then repopulate each one
//! under its merge policy. Any failure rolls the whole transaction back and
//! leaves the store exactly as it was.

#![allow(clippy::result_large_err)]

use crate::backup::document::{
    version_major, LinkRecord, PostRecord, SettingsRecord, SnapshotDocument, SubscriberRecord,
    SUPPORTED_MAJOR,
};
use crate::errors::{from_rusqlite, Result};
use crate::repo::{Collection, MergePolicy};
use chrono::{DateTime, Utc};
use limebyte_core::model::{
    BOOTSTRAP_ADMIN_ID, DEFAULT_FOOTER_TEXT, DEFAULT_SITE_DESCRIPTION, DEFAULT_SITE_TITLE,
    SETTINGS_SINGLETON_ID,
};
use limebyte_core::LimebyteError;
use rusqlite::{Connection, Transaction};
use serde::Serialize;
use tracing::info;

/// Per-collection counts of processed records, reported on success
///
/// Counters reflect processed records (attempted upserts, skipped duplicate
/// subscribers included), not only successful inserts. `users` is always 0:
/// that collection is never mutated by import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportStats {
    pub users: u64,
    pub posts: u64,
    pub subscribers: u64,
    pub links: u64,
    pub settings: u64,
    pub completed_at: DateTime<Utc>,
}

/// Apply a snapshot document to the store
///
/// Pre-transaction validation rejects documents declaring an incompatible
/// format major version. Everything else runs inside a single transaction;
/// the `Transaction` guard rolls back on every early return.
pub fn import(conn: &mut Connection, doc: &SnapshotDocument) -> Result<ImportStats> {
    check_version(doc)?;

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("import_begin", e))?;

    clear_replaceable(&tx)?;

    let posts = import_posts(&tx, doc.tables.posts.as_deref())?;
    let subscribers = import_subscribers(&tx, doc.tables.subscribers.as_deref())?;
    let links = import_links(&tx, doc.tables.links.as_deref())?;
    let settings = import_settings(&tx, doc.tables.settings.as_deref())?;

    tx.commit().map_err(|e| from_rusqlite("import_commit", e))?;

    info!(posts, subscribers, links, settings, "database import committed");

    Ok(ImportStats {
        users: 0,
        posts,
        subscribers,
        links,
        settings,
        completed_at: Utc::now(),
    })
}

/// Reject documents from an incompatible format major version
///
/// A missing or unparseable version tag is informational and accepted, the
/// same way older dumps carried arbitrary tags.
fn check_version(doc: &SnapshotDocument) -> Result<()> {
    if let Some(version) = &doc.version {
        if let Some(major) = version_major(version) {
            if major != SUPPORTED_MAJOR {
                return Err(LimebyteError::UnsupportedVersion {
                    version: version.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Delete prior state from every collection whose merge policy allows it
///
/// `users` is excluded so the acting administrator survives the restore;
/// the settings singleton row is kept for the in-place update.
fn clear_replaceable(tx: &Transaction) -> Result<()> {
    for collection in Collection::ALL {
        let sql = match collection.merge_policy() {
            MergePolicy::Preserve => continue,
            MergePolicy::SingletonUpdate => format!(
                "DELETE FROM {} WHERE id > {}",
                collection.name(),
                SETTINGS_SINGLETON_ID
            ),
            _ => format!("DELETE FROM {}", collection.name()),
        };
        tx.execute(&sql, [])
            .map_err(|e| from_rusqlite("import_clear", e))?;
    }

    Ok(())
}

fn import_posts(tx: &Transaction, records: Option<&[PostRecord]>) -> Result<u64> {
    let mut count = 0u64;
    for record in records.unwrap_or_default() {
        let now = Utc::now();
        tx.execute(
            "INSERT INTO posts (subject, message, slug, author_id, view_count, pinned, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(slug) DO UPDATE SET
                subject = excluded.subject,
                message = excluded.message,
                view_count = excluded.view_count,
                pinned = excluded.pinned,
                updated_at = excluded.updated_at",
            rusqlite::params![
                record.subject,
                record.message,
                record.slug,
                record.author_id.unwrap_or(BOOTSTRAP_ADMIN_ID),
                record.view_count.unwrap_or(0),
                record.pinned.unwrap_or(false) as i64,
                record.created_at.unwrap_or(now).timestamp(),
                record.updated_at.unwrap_or(now).timestamp(),
            ],
        )
        .map_err(|e| from_rusqlite("import_posts", e))?;
        count += 1;
    }
    Ok(count)
}

fn import_subscribers(tx: &Transaction, records: Option<&[SubscriberRecord]>) -> Result<u64> {
    let mut count = 0u64;
    for record in records.unwrap_or_default() {
        tx.execute(
            "INSERT INTO subscribers (email, ip_address, created_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(email) DO NOTHING",
            rusqlite::params![
                record.email,
                record.ip_address,
                record.created_at.unwrap_or_else(Utc::now).timestamp(),
            ],
        )
        .map_err(|e| from_rusqlite("import_subscribers", e))?;
        count += 1;
    }
    Ok(count)
}

fn import_links(tx: &Transaction, records: Option<&[LinkRecord]>) -> Result<u64> {
    let mut count = 0u64;
    for record in records.unwrap_or_default() {
        tx.execute(
            "INSERT INTO links (title, url, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                record.title,
                record.url,
                record.created_at.unwrap_or_else(Utc::now).timestamp(),
            ],
        )
        .map_err(|e| from_rusqlite("import_links", e))?;
        count += 1;
    }
    Ok(count)
}

/// Update the settings singleton from the first supplied record, if any
fn import_settings(tx: &Transaction, records: Option<&[SettingsRecord]>) -> Result<u64> {
    let Some(record) = records.unwrap_or_default().first() else {
        return Ok(0);
    };

    tx.execute(
        "UPDATE settings
         SET site_title = ?1, footer_text = ?2, site_description = ?3, updated_at = ?4
         WHERE id = ?5",
        rusqlite::params![
            record.site_title.as_deref().unwrap_or(DEFAULT_SITE_TITLE),
            record.footer_text.as_deref().unwrap_or(DEFAULT_FOOTER_TEXT),
            record
                .site_description
                .as_deref()
                .unwrap_or(DEFAULT_SITE_DESCRIPTION),
            Utc::now().timestamp(),
            SETTINGS_SINGLETON_ID,
        ],
    )
    .map_err(|e| from_rusqlite("import_settings", e))?;

    Ok(1)
}
