//! RON catalog loader

use crate::error::{Error, Result};
use crate::schema::{CatalogFile, PeriodDef};
use chronodeck_core::PresetPeriod;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Loader for RON preset catalogs
///
/// Periods keep their authored order; ids must be unique across every file
/// loaded into the same loader.
#[derive(Debug, Default)]
pub struct Loader {
    periods: IndexMap<String, PresetPeriod>,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single RON catalog file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = fs::read_to_string(path.as_ref())?;
        self.load_str(&content)
    }

    /// Load a catalog from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = ron::from_str(content)?;
        for period in file.periods {
            self.validate(&period)?;
            if self.periods.contains_key(&period.id) {
                return Err(Error::DuplicatePeriod(period.id));
            }
            self.periods.insert(period.id.clone(), period.to_preset());
        }
        Ok(())
    }

    fn validate(&self, period: &PeriodDef) -> Result<()> {
        if !period.timestamp().is_valid() {
            return Err(Error::InvalidPeriod {
                id: period.id.clone(),
                reason: format!(
                    "not a calendar date: ({}, {}, {})",
                    period.date.0, period.date.1, period.date.2
                ),
            });
        }
        // Catalog entries are authored content, so out-of-range positions are
        // rejected here instead of being clamped like live slider input
        if !(0.0..=100.0).contains(&period.timeline_position) {
            return Err(Error::InvalidPeriod {
                id: period.id.clone(),
                reason: format!(
                    "timeline_position {} outside [0, 100]",
                    period.timeline_position
                ),
            });
        }
        Ok(())
    }

    /// Number of periods loaded so far
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Finish loading and return the catalog, in authored order
    pub fn finish(self) -> IndexMap<String, PresetPeriod> {
        self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronodeck_core::Timestamp;

    const CATALOG: &str = r#"
    (
        periods: [
            (
                id: "ancient-egypt",
                name: "Ancient Egypt",
                date: (-2499, 1, 1),
                timeline_position: 10.0,
            ),
            (
                id: "renaissance",
                name: "Renaissance",
                date: (1500, 1, 1),
                timeline_position: 30.0,
            ),
        ]
    )
    "#;

    #[test]
    fn test_load_catalog() {
        let mut loader = Loader::new();
        loader.load_str(CATALOG).unwrap();

        let catalog = loader.finish();
        assert_eq!(catalog.len(), 2);

        let egypt = &catalog["ancient-egypt"];
        assert_eq!(egypt.name, "Ancient Egypt");
        assert_eq!(egypt.date, Timestamp::new(-2499, 1, 1));
        assert_eq!(egypt.timeline_position, 10.0);

        // Authored order preserved
        let ids: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(ids, ["ancient-egypt", "renaissance"]);
    }

    #[test]
    fn test_duplicate_period_rejected() {
        let mut loader = Loader::new();
        loader.load_str(CATALOG).unwrap();

        let result = loader.load_str(CATALOG);
        assert!(matches!(result, Err(Error::DuplicatePeriod(id)) if id == "ancient-egypt"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let content = r#"
        (
            periods: [
                (
                    id: "bad-date",
                    name: "Bad Date",
                    date: (1900, 2, 29),
                    timeline_position: 40.0,
                ),
            ]
        )
        "#;

        let mut loader = Loader::new();
        assert!(matches!(
            loader.load_str(content),
            Err(Error::InvalidPeriod { id, .. }) if id == "bad-date"
        ));
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        let content = r#"
        (
            periods: [
                (
                    id: "too-far",
                    name: "Too Far",
                    date: (3000, 1, 1),
                    timeline_position: 130.0,
                ),
            ]
        )
        "#;

        let mut loader = Loader::new();
        assert!(matches!(
            loader.load_str(content),
            Err(Error::InvalidPeriod { id, .. }) if id == "too-far"
        ));
    }

    #[test]
    fn test_catalog_drives_target_store() {
        use chronodeck_core::TargetStore;

        let mut loader = Loader::new();
        loader.load_str(CATALOG).unwrap();

        let now = Timestamp::new(2025, 6, 1);
        let mut target = TargetStore::with_catalog(now, loader.finish());

        assert!(target.select_preset("renaissance"));
        assert_eq!(target.target_date(), Timestamp::new(1500, 1, 1));
        assert_eq!(target.timeline_position(), 30.0);

        // Built-in ids are absent from a custom catalog
        assert!(!target.select_preset("near-future"));
    }
}
