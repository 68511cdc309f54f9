use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The reserved identifier of the settings singleton row
pub const SETTINGS_SINGLETON_ID: i64 = 1;

/// Default site title applied when a restore omits the field
pub const DEFAULT_SITE_TITLE: &str = "My Blog";

/// Default footer text applied when a restore omits the field
pub const DEFAULT_FOOTER_TEXT: &str = "Building the future, one commit at a time.";

/// Default site description applied when a restore omits the field
pub const DEFAULT_SITE_DESCRIPTION: &str = "No expectations, just building weird stuff for fun.";

/// Site-wide settings
///
/// Exactly one logical settings record exists at any time, held in the row
/// with [`SETTINGS_SINGLETON_ID`]. It is updated in place and never deleted
/// or duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Row identifier; always [`SETTINGS_SINGLETON_ID`] for the live row
    pub id: i64,

    /// Site title shown in the header
    pub site_title: String,

    /// Footer text
    pub footer_text: String,

    /// Description used in meta tags
    pub site_description: String,

    /// Timestamp when the singleton was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// The settings singleton with all fields at their fixed defaults
    pub fn defaults() -> Self {
        let now = Utc::now();
        Self {
            id: SETTINGS_SINGLETON_ID,
            site_title: DEFAULT_SITE_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            site_description: DEFAULT_SITE_DESCRIPTION.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
