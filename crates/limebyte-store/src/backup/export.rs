//! Exporter
//!
//! Reads the five collections independently and serializes them into one
//! self-describing snapshot document. A failed collection read degrades that
//! collection to an empty sequence instead of aborting the export, so a
//! partially-corrupt store still yields a usable partial backup.

#![allow(clippy::result_large_err)]

use crate::backup::document::{SnapshotDocument, SnapshotTables, FORMAT_VERSION};
use crate::errors::Result;
use crate::repo;
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;
use tracing::warn;

/// Outcome of a single collection read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableStatus {
    /// Read succeeded with this many rows
    Loaded { rows: usize },
    /// Read failed; the collection was degraded to an empty sequence
    Degraded { cause: String },
}

/// Per-collection read outcomes for one export
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub users: TableStatus,
    pub posts: TableStatus,
    pub subscribers: TableStatus,
    pub links: TableStatus,
    pub settings: TableStatus,
}

impl ExportReport {
    /// Names of collections that were degraded during the export
    pub fn degraded(&self) -> Vec<&'static str> {
        let entries = [
            ("users", &self.users),
            ("posts", &self.posts),
            ("subscribers", &self.subscribers),
            ("links", &self.links),
            ("settings", &self.settings),
        ];
        entries
            .into_iter()
            .filter(|(_, status)| matches!(status, TableStatus::Degraded { .. }))
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether every collection read succeeded
    pub fn is_complete(&self) -> bool {
        self.degraded().is_empty()
    }
}

fn read_collection<M, R>(
    name: &'static str,
    result: Result<Vec<M>>,
    convert: impl Fn(&M) -> R,
) -> (Vec<R>, TableStatus) {
    match result {
        Ok(rows) => {
            let records: Vec<R> = rows.iter().map(convert).collect();
            let status = TableStatus::Loaded {
                rows: records.len(),
            };
            (records, status)
        }
        Err(err) => {
            warn!(collection = name, error = %err, "collection read failed, exporting as empty");
            (
                Vec::new(),
                TableStatus::Degraded {
                    cause: err.to_string(),
                },
            )
        }
    }
}

/// Export the full store into a snapshot document, with a per-collection
/// read report
pub fn export_with_report(conn: &Connection) -> (SnapshotDocument, ExportReport) {
    let (users, users_status) = read_collection("users", repo::load_users(conn), |u| u.into());
    let (posts, posts_status) = read_collection("posts", repo::load_posts(conn), |p| p.into());
    let (subscribers, subscribers_status) =
        read_collection("subscribers", repo::load_subscribers(conn), |s| s.into());
    let (links, links_status) = read_collection("links", repo::load_links(conn), |l| l.into());
    let (settings, settings_status) =
        read_collection("settings", repo::load_settings(conn), |s| s.into());

    let document = SnapshotDocument {
        timestamp: Some(Utc::now()),
        version: Some(FORMAT_VERSION.to_string()),
        tables: SnapshotTables {
            users: Some(users),
            posts: Some(posts),
            subscribers: Some(subscribers),
            links: Some(links),
            settings: Some(settings),
        },
    };

    let report = ExportReport {
        users: users_status,
        posts: posts_status,
        subscribers: subscribers_status,
        links: links_status,
        settings: settings_status,
    };

    (document, report)
}

/// Export the full store into a snapshot document
pub fn export(conn: &Connection) -> Result<SnapshotDocument> {
    let (document, _) = export_with_report(conn);
    Ok(document)
}
