//! User display preferences
//!
//! Four independent toggles persisted across sessions by the storage layer.
//! `reset` always restores the literal default tuple.

use serde::{Deserialize, Serialize};

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

/// User display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    pub theme: Theme,
    pub animations_enabled: bool,
    pub sound_enabled: bool,
    pub notifications_enabled: bool,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            animations_enabled: true,
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}

impl UserPrefs {
    /// Replace the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip the animations toggle
    pub fn toggle_animations(&mut self) {
        self.animations_enabled = !self.animations_enabled;
    }

    /// Flip the sound toggle
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Flip the notifications toggle
    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// Restore the default tuple regardless of prior state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
