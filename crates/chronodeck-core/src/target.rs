//! Time-target store
//!
//! Holds the selected destination date and the normalized timeline position,
//! plus the read-only catalog of preset destinations. Date and position are
//! independently settable, but a preset selection overwrites both at once.

use crate::Timestamp;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const POSITION_MIN: f64 = 0.0;
const POSITION_MAX: f64 = 100.0;
const POSITION_MIDPOINT: f64 = 50.0;

/// A named one-click destination: a (date, timeline position) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetPeriod {
    pub id: String,
    pub name: String,
    pub date: Timestamp,
    pub timeline_position: f64,
}

impl PresetPeriod {
    /// Create a new preset period
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: Timestamp,
        timeline_position: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            timeline_position,
        }
    }
}

/// Destination date, timeline position, and the preset catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetStore {
    target_date: Timestamp,
    timeline_position: f64,
    /// Construction-time "now", restored by `reset`
    origin: Timestamp,
    /// Read-only catalog, in authored order
    presets: IndexMap<String, PresetPeriod>,
}

impl TargetStore {
    /// Create a store anchored at `now` with the built-in preset catalog
    pub fn new(now: Timestamp) -> Self {
        Self::with_catalog(now, Self::builtin_catalog(now))
    }

    /// Create a store anchored at `now` with a custom preset catalog
    pub fn with_catalog(now: Timestamp, presets: IndexMap<String, PresetPeriod>) -> Self {
        Self {
            target_date: now,
            timeline_position: POSITION_MIDPOINT,
            origin: now,
            presets,
        }
    }

    fn builtin_catalog(now: Timestamp) -> IndexMap<String, PresetPeriod> {
        let periods = [
            PresetPeriod::new(
                "ancient-egypt",
                "Ancient Egypt",
                Timestamp::new(-2499, 1, 1),
                10.0,
            ),
            PresetPeriod::new(
                "renaissance",
                "Renaissance",
                Timestamp::new(1500, 1, 1),
                30.0,
            ),
            PresetPeriod::new("present", "Present Day", now, POSITION_MIDPOINT),
            PresetPeriod::new(
                "near-future",
                "Near Future",
                Timestamp::new(2050, 1, 1),
                70.0,
            ),
        ];

        periods.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    /// Currently selected destination date
    pub fn target_date(&self) -> Timestamp {
        self.target_date
    }

    /// Current normalized timeline position in [0, 100]
    pub fn timeline_position(&self) -> f64 {
        self.timeline_position
    }

    /// The preset catalog, in authored order
    pub fn presets(&self) -> impl Iterator<Item = &PresetPeriod> {
        self.presets.values()
    }

    /// Look up a preset by id
    pub fn preset(&self, id: &str) -> Option<&PresetPeriod> {
        self.presets.get(id)
    }

    /// Replace the destination date; the timeline position is untouched
    pub fn set_target_date(&mut self, date: Timestamp) {
        self.target_date = date;
    }

    /// Replace the timeline position, clamped to [0, 100]
    pub fn set_timeline_position(&mut self, position: f64) {
        self.timeline_position = position.clamp(POSITION_MIN, POSITION_MAX);
    }

    /// Overwrite both date and position from a preset
    ///
    /// Unknown ids are a silent no-op; returns whether a preset was applied.
    pub fn select_preset(&mut self, id: &str) -> bool {
        match self.presets.get(id) {
            Some(preset) => {
                self.target_date = preset.date;
                self.timeline_position = preset.timeline_position;
                true
            }
            None => false,
        }
    }

    /// Restore the construction-time date and the midpoint position
    pub fn reset(&mut self) {
        self.target_date = self.origin;
        self.timeline_position = POSITION_MIDPOINT;
    }

    /// Signed timeline deviation from the midpoint, in percent
    pub fn deviation_percent(&self) -> f64 {
        let pos = self.timeline_position;
        if pos < POSITION_MIDPOINT {
            -(100.0 - 2.0 * pos)
        } else {
            2.0 * (pos - POSITION_MIDPOINT)
        }
    }

    /// Timeline deviation formatted for display, e.g. "-100%" or "+42%"
    pub fn deviation_label(&self) -> String {
        let pos = self.timeline_position;
        if pos < POSITION_MIDPOINT {
            format!("-{}%", 100.0 - 2.0 * pos)
        } else {
            format!("+{}%", 2.0 * (pos - POSITION_MIDPOINT))
        }
    }
}
