use thiserror::Error;

/// Result type alias using LimebyteError
pub type Result<T> = std::result::Result<T, LimebyteError>;

/// Canonical error taxonomy for the backup/restore engine
///
/// Each variant maps to a stable error code so callers can branch on the
/// failure class (e.g. present "invalid backup file" vs "import failed"
/// differently) without matching on message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimebyteError {
    /// The supplied backup document is not well-formed
    #[error("Invalid backup document: {reason}")]
    Format { reason: String },

    /// The backup document declares an incompatible format major version
    #[error("Unsupported backup format version: {version}")]
    UnsupportedVersion { version: String },

    /// A store write/delete failed inside the import transaction
    #[error("Store error in operation '{op}': {message}")]
    Store { op: String, message: String },

    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure (reading or writing dump files)
    #[error("IO error in operation '{op}': {message}")]
    Io { op: String, message: String },
}

impl LimebyteError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LimebyteError::Format { .. } => "ERR_FORMAT",
            LimebyteError::UnsupportedVersion { .. } => "ERR_UNSUPPORTED_VERSION",
            LimebyteError::Store { .. } => "ERR_STORE",
            LimebyteError::Serialization { .. } => "ERR_SERIALIZATION",
            LimebyteError::Io { .. } => "ERR_IO",
        }
    }

    /// Whether this error means the supplied document was rejected before
    /// any store access (format family)
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            LimebyteError::Format { .. } | LimebyteError::UnsupportedVersion { .. }
        )
    }

    /// Whether this error came from the store side of an import
    pub fn is_store(&self) -> bool {
        matches!(self, LimebyteError::Store { .. })
    }
}

/// Conversion from serde_json::Error to LimebyteError
impl From<serde_json::Error> for LimebyteError {
    fn from(err: serde_json::Error) -> Self {
        LimebyteError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_stable() {
        let cases = [
            (
                LimebyteError::Format {
                    reason: "x".into(),
                },
                "ERR_FORMAT",
            ),
            (
                LimebyteError::UnsupportedVersion {
                    version: "2.0.0".into(),
                },
                "ERR_UNSUPPORTED_VERSION",
            ),
            (
                LimebyteError::Store {
                    op: "import".into(),
                    message: "x".into(),
                },
                "ERR_STORE",
            ),
            (
                LimebyteError::Serialization {
                    message: "x".into(),
                },
                "ERR_SERIALIZATION",
            ),
            (
                LimebyteError::Io {
                    op: "read".into(),
                    message: "x".into(),
                },
                "ERR_IO",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_format_family_classification() {
        let format = LimebyteError::Format {
            reason: "missing tables".into(),
        };
        let version = LimebyteError::UnsupportedVersion {
            version: "9.0.0".into(),
        };
        let store = LimebyteError::Store {
            op: "import".into(),
            message: "constraint".into(),
        };

        assert!(format.is_format());
        assert!(version.is_format());
        assert!(!store.is_format());
        assert!(store.is_store());
        assert!(!format.is_store());
    }
}
