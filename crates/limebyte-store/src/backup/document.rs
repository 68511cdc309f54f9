//! Snapshot document schema
//!
//! Defines the JSON structure a backup travels in, with typed records per
//! collection. Every record field except the collection's own payload is
//! optional; defaulting happens explicitly at the import boundary rather
//! than through untyped lookups.

#![allow(clippy::result_large_err)]

use crate::errors::{format_error, Result};
use chrono::{DateTime, Utc};
use limebyte_core::model::{Link, Post, SiteSettings, Subscriber, User};
use serde::{Deserialize, Serialize};

/// Format version written by export
pub const FORMAT_VERSION: &str = "1.0.0";

/// Major version this importer can apply
pub const SUPPORTED_MAJOR: u32 = 1;

/// Top-level snapshot document
///
/// `timestamp` and `version` are informational; validation concerns only
/// the shape of `tables` (and, on import, the version major).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub tables: SnapshotTables,
}

/// The five collections; a `None` collection was absent (or not a sequence)
/// in the source document and is skipped by import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotTables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<Vec<SubscriberRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkRecord>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<SettingsRecord>>,
}

/// User entry; read-ignored by import, present so backups are complete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Post entry, upserted by slug
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    pub id: Option<i64>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub slug: Option<String>,
    pub author_id: Option<i64>,
    pub view_count: Option<i64>,
    pub pinned: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Subscriber entry, inserted with duplicate emails skipped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberRecord {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Link entry, plainly inserted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Settings entry; only the first one in the sequence is applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    pub id: Option<i64>,
    pub site_title: Option<String>,
    pub footer_text: Option<String>,
    pub site_description: Option<String>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: Some(user.username.clone()),
            password: Some(user.password.expose().clone()),
            display_name: user.display_name.clone(),
            created_at: Some(user.created_at),
        }
    }
}

impl From<&Post> for PostRecord {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id),
            subject: Some(post.subject.clone()),
            message: Some(post.message.clone()),
            slug: post.slug.clone(),
            author_id: Some(post.author_id),
            view_count: Some(post.view_count),
            pinned: Some(post.pinned),
            created_at: Some(post.created_at),
            updated_at: Some(post.updated_at),
        }
    }
}

impl From<&Subscriber> for SubscriberRecord {
    fn from(sub: &Subscriber) -> Self {
        Self {
            id: Some(sub.id),
            email: Some(sub.email.clone()),
            ip_address: sub.ip_address.clone(),
            created_at: Some(sub.created_at),
        }
    }
}

impl From<&Link> for LinkRecord {
    fn from(link: &Link) -> Self {
        Self {
            id: Some(link.id),
            title: Some(link.title.clone()),
            url: Some(link.url.clone()),
            created_at: Some(link.created_at),
        }
    }
}

impl From<&SiteSettings> for SettingsRecord {
    fn from(settings: &SiteSettings) -> Self {
        Self {
            id: Some(settings.id),
            site_title: Some(settings.site_title.clone()),
            footer_text: Some(settings.footer_text.clone()),
            site_description: Some(settings.site_description.clone()),
        }
    }
}

/// Parse a snapshot document from a JSON string
pub fn parse_str(content: &str) -> Result<SnapshotDocument> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| format_error(format!("not valid JSON: {}", e)))?;

    parse_document(&value)
}

/// Parse a snapshot document from a JSON value
///
/// Rejects a missing or non-object `tables` field. Collections whose entry
/// under `tables` is absent or not a sequence come back as `None`; sequence
/// entries that are not objects of the expected shape are a format error.
pub fn parse_document(value: &serde_json::Value) -> Result<SnapshotDocument> {
    let tables = match value.get("tables") {
        Some(tables) if tables.is_object() => tables,
        _ => return Err(format_error("missing or non-object 'tables' field")),
    };

    let timestamp = value
        .get("timestamp")
        .and_then(|v| serde_json::from_value(v.clone()).ok());
    let version = value
        .get("version")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    Ok(SnapshotDocument {
        timestamp,
        version,
        tables: SnapshotTables {
            users: parse_collection(tables, "users")?,
            posts: parse_collection(tables, "posts")?,
            subscribers: parse_collection(tables, "subscribers")?,
            links: parse_collection(tables, "links")?,
            settings: parse_collection(tables, "settings")?,
        },
    })
}

fn parse_collection<T: serde::de::DeserializeOwned>(
    tables: &serde_json::Value,
    name: &str,
) -> Result<Option<Vec<T>>> {
    match tables.get(name) {
        Some(entry) if entry.is_array() => {
            let records: Vec<T> = serde_json::from_value(entry.clone())
                .map_err(|e| format_error(format!("malformed '{}' records: {}", name, e)))?;
            Ok(Some(records))
        }
        // Absent or not list-shaped: collection not supplied
        _ => Ok(None),
    }
}

/// Extract the major component of a version string, if it parses
pub fn version_major(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}
