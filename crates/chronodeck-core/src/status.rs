//! System status store
//!
//! Holds the three simulated vital-sign metrics and a bounded queue of
//! operator warnings. Metric setters clamp to [0, 100] and never reject;
//! the warning queue is newest-first and evicts its tail at capacity.

use crate::Tick;
use serde::{Deserialize, Serialize};

/// Maximum warnings retained; insertion at capacity evicts the oldest
pub const MAX_WARNINGS: usize = 5;

const METRIC_MIN: f64 = 0.0;
const METRIC_MAX: f64 = 100.0;

/// Severity of an operator warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Info,
    Warning,
    Critical,
}

/// A transient operator notification
///
/// Immutable once created. No deduplication is performed by id; the queue
/// simply holds the five most recent entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub id: String,
    pub kind: WarningKind,
    pub message: String,
    pub created_at: Tick,
}

impl Warning {
    /// Create a new warning
    pub fn new(
        id: impl Into<String>,
        kind: WarningKind,
        message: impl Into<String>,
        created_at: Tick,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            message: message.into(),
            created_at,
        }
    }

    /// Create an informational warning
    pub fn info(id: impl Into<String>, message: impl Into<String>, created_at: Tick) -> Self {
        Self::new(id, WarningKind::Info, message, created_at)
    }

    /// Create a standard warning
    pub fn warning(id: impl Into<String>, message: impl Into<String>, created_at: Tick) -> Self {
        Self::new(id, WarningKind::Warning, message, created_at)
    }

    /// Create a critical warning
    pub fn critical(id: impl Into<String>, message: impl Into<String>, created_at: Tick) -> Self {
        Self::new(id, WarningKind::Critical, message, created_at)
    }
}

/// Read-side classification of a metric value; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricLevel {
    Nominal,
    Degraded,
    Critical,
}

impl MetricLevel {
    /// Classify a metric value
    pub fn of(value: f64) -> Self {
        if value >= 80.0 {
            MetricLevel::Nominal
        } else if value >= 60.0 {
            MetricLevel::Degraded
        } else {
            MetricLevel::Critical
        }
    }
}

/// Simulated vital signs and the warning queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusStore {
    health: f64,
    stability: f64,
    power: f64,
    /// Newest first, at most `MAX_WARNINGS` entries
    warnings: Vec<Warning>,
}

impl StatusStore {
    /// Create a store with the standard initial readings
    pub fn new() -> Self {
        Self {
            health: 92.5,
            stability: 87.2,
            power: 95.0,
            warnings: Vec::new(),
        }
    }

    /// Current health metric
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Current stability metric
    pub fn stability(&self) -> f64 {
        self.stability
    }

    /// Current power metric
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Warnings, newest first
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Replace the health metric, clamped to [0, 100]
    pub fn set_health(&mut self, value: f64) {
        self.health = value.clamp(METRIC_MIN, METRIC_MAX);
    }

    /// Replace the stability metric, clamped to [0, 100]
    pub fn set_stability(&mut self, value: f64) {
        self.stability = value.clamp(METRIC_MIN, METRIC_MAX);
    }

    /// Replace the power metric, clamped to [0, 100]
    pub fn set_power(&mut self, value: f64) {
        self.power = value.clamp(METRIC_MIN, METRIC_MAX);
    }

    /// Prepend a warning, evicting the oldest entry past capacity
    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.insert(0, warning);
        self.warnings.truncate(MAX_WARNINGS);
    }

    /// Remove the first warning with a matching id; no-op if absent
    pub fn remove_warning(&mut self, id: &str) -> bool {
        match self.warnings.iter().position(|w| w.id == id) {
            Some(index) => {
                self.warnings.remove(index);
                true
            }
            None => false,
        }
    }

    /// Reset the warning queue to empty
    pub fn clear_warnings(&mut self) {
        self.warnings.clear();
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_clamp() {
        let mut status = StatusStore::new();

        status.set_health(140.0);
        assert_eq!(status.health(), 100.0);

        status.set_stability(-5.0);
        assert_eq!(status.stability(), 0.0);

        status.set_power(63.4);
        assert_eq!(status.power(), 63.4);
    }

    #[test]
    fn test_warning_capacity_evicts_oldest() {
        let mut status = StatusStore::new();

        for i in 0..6 {
            status.add_warning(Warning::info(format!("w-{}", i), "drift detected", i));
        }

        assert_eq!(status.warnings().len(), MAX_WARNINGS);
        // Newest first; "w-0" was the tail and got evicted on the sixth add
        assert_eq!(status.warnings()[0].id, "w-5");
        assert_eq!(status.warnings()[4].id, "w-1");
        assert!(!status.warnings().iter().any(|w| w.id == "w-0"));
    }

    #[test]
    fn test_remove_warning() {
        let mut status = StatusStore::new();
        status.add_warning(Warning::critical("w-1", "power surge", 1));
        status.add_warning(Warning::info("w-2", "calibration complete", 2));

        assert!(status.remove_warning("w-1"));
        assert_eq!(status.warnings().len(), 1);

        // Unknown id is a silent no-op
        assert!(!status.remove_warning("w-9"));
        assert_eq!(status.warnings().len(), 1);
    }

    #[test]
    fn test_clear_warnings() {
        let mut status = StatusStore::new();
        status.add_warning(Warning::warning("w-1", "shield flicker", 1));
        status.clear_warnings();
        assert!(status.warnings().is_empty());
    }

    #[test]
    fn test_metric_level() {
        assert_eq!(MetricLevel::of(95.0), MetricLevel::Nominal);
        assert_eq!(MetricLevel::of(80.0), MetricLevel::Nominal);
        assert_eq!(MetricLevel::of(79.9), MetricLevel::Degraded);
        assert_eq!(MetricLevel::of(60.0), MetricLevel::Degraded);
        assert_eq!(MetricLevel::of(59.9), MetricLevel::Critical);
    }
}
