//! Error handling for limebyte-store
//!
//! Wraps limebyte-core LimebyteError with store-specific helpers

use limebyte_core::LimebyteError;

/// Result type alias using LimebyteError
pub type Result<T> = std::result::Result<T, LimebyteError>;

/// Create a format error (malformed backup document)
pub fn format_error(reason: impl Into<String>) -> LimebyteError {
    LimebyteError::Format {
        reason: reason.into(),
    }
}

/// Create a store error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> LimebyteError {
    LimebyteError::Store {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> LimebyteError {
    LimebyteError::Store {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> LimebyteError {
    LimebyteError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
}
