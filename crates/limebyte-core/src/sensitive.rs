//! Sensitive data marker for automatic redaction
//!
//! The `Sensitive<T>` wrapper ensures that credential material (password
//! hashes) is never accidentally logged or displayed. Serialization passes
//! through unchanged because backups must round-trip the hash.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use limebyte_core::Sensitive;
///
/// let hash = Sensitive::new("$2b$10$abcdef".to_string());
/// assert_eq!(format!("{:?}", hash), "***REDACTED***");
/// assert_eq!(hash.expose(), "$2b$10$abcdef");
/// ```
#[derive(Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this method sparingly and only when the value must actually be
    /// read (e.g. writing it into a backup row).
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redaction() {
        let secret = Sensitive::new("hunter2");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_display_redaction() {
        let secret = Sensitive::new("hunter2");
        assert_eq!(format!("{}", secret), "***REDACTED***");
    }

    #[test]
    fn test_serde_passthrough() {
        let secret = Sensitive::new("$2b$10$abcdef".to_string());
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"$2b$10$abcdef\"");

        let back: Sensitive<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.expose(), "$2b$10$abcdef");
    }

    #[test]
    fn test_into_inner() {
        let secret = Sensitive::new(String::from("x"));
        assert_eq!(secret.into_inner(), "x");
    }
}
