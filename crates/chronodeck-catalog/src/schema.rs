//! Preset catalog schema

use chronodeck_core::{PresetPeriod, Timestamp};
use serde::{Deserialize, Serialize};

/// One preset period as authored in a RON catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDef {
    /// Unique identifier for this period
    pub id: String,
    /// Display name
    pub name: String,
    /// Calendar date as (year, month, day); year <= 0 is BCE
    pub date: (i32, u8, u8),
    /// Normalized position on the past-future axis, in [0, 100]
    pub timeline_position: f64,
}

impl PeriodDef {
    /// The authored calendar date
    pub fn timestamp(&self) -> Timestamp {
        let (year, month, day) = self.date;
        Timestamp::new(year, month, day)
    }

    /// Convert to a catalog entry
    pub fn to_preset(&self) -> PresetPeriod {
        PresetPeriod::new(
            self.id.clone(),
            self.name.clone(),
            self.timestamp(),
            self.timeline_position,
        )
    }
}

/// A complete catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub periods: Vec<PeriodDef>,
}
