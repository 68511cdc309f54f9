//! Backup/restore engine
//!
//! Provides:
//! - Snapshot document schema with validation (`document`)
//! - Exporter with per-collection fault tolerance (`export`)
//! - Transactional importer with merge policies (`import`)

pub mod document;
pub mod export;
pub mod import;

pub use document::{parse_document, parse_str, SnapshotDocument, FORMAT_VERSION};
pub use export::{export, export_with_report, ExportReport, TableStatus};
pub use import::{import, ImportStats};
