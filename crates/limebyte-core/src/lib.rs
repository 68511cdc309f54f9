//! Limebyte Core - domain models and error taxonomy
//!
//! Provides:
//! - Domain models for the five blog collections (users, posts, subscribers,
//!   links, settings)
//! - Canonical error type with stable error codes
//! - `Sensitive<T>` wrapper for credential material

pub mod errors;
pub mod model;
pub mod sensitive;

// Re-export key types
pub use errors::{LimebyteError, Result};
pub use sensitive::Sensitive;
