//! Limebyte Store - persistence layer and backup/restore engine
//!
//! Provides:
//! - SQLite schema with migrations framework
//! - Repository layer for per-collection reads
//! - Snapshot document schema with validation
//! - Exporter (per-collection fault tolerance) and transactional Importer

pub mod backup;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
