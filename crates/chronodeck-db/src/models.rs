//! Preference record for durable storage.

use chronodeck_core::{Theme, UserPrefs};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Fixed namespace key for the single preference record.
pub const PREFS_KEY: &str = "user-preferences";

/// Stored user preferences.
///
/// Fields are stored flat so the record stays a plain key/value shape;
/// schema evolution rides on the native_model version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredPrefs {
    /// Always `PREFS_KEY` - single row.
    #[primary_key]
    pub id: String,
    /// Theme name ("light" | "dark" | "system").
    pub theme: String,
    /// Animations toggle.
    pub animations_enabled: bool,
    /// Sound toggle.
    pub sound_enabled: bool,
    /// Notifications toggle.
    pub notifications_enabled: bool,
}

impl StoredPrefs {
    /// Create from user preferences.
    pub fn from_prefs(prefs: &UserPrefs) -> Self {
        let theme = match prefs.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        Self {
            id: PREFS_KEY.to_string(),
            theme: theme.to_string(),
            animations_enabled: prefs.animations_enabled,
            sound_enabled: prefs.sound_enabled,
            notifications_enabled: prefs.notifications_enabled,
        }
    }

    /// Convert to user preferences.
    ///
    /// An unrecognized theme name falls back to the default theme rather
    /// than failing the whole record.
    pub fn to_prefs(&self) -> UserPrefs {
        let theme = match self.theme.as_str() {
            "light" => Theme::Light,
            "system" => Theme::System,
            _ => Theme::Dark,
        };
        UserPrefs {
            theme,
            animations_enabled: self.animations_enabled,
            sound_enabled: self.sound_enabled,
            notifications_enabled: self.notifications_enabled,
        }
    }
}
