//! Dashboard model (complete session state)

use crate::{Clock, DriftRng, HistoryStore, StatusStore, TargetStore, Tick, Timestamp, UserPrefs};
use serde::{Deserialize, Serialize};

/// The complete dashboard state
///
/// Each store exclusively owns its slice; nothing is shared by reference
/// across stores. One instance per running dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Simulated vital signs and warnings
    pub status: StatusStore,
    /// Destination date, timeline position, presets
    pub target: TargetStore,
    /// Past travel attempts, newest first
    pub history: HistoryStore,
    /// Display preferences
    pub prefs: UserPrefs,
    /// Session clock
    pub clock: Clock,
    /// Deterministic RNG for the drift simulation
    pub rng: DriftRng,
}

impl Model {
    /// Create a new model anchored at the given "now"
    pub fn new(now: Timestamp) -> Self {
        Self {
            status: StatusStore::new(),
            target: TargetStore::new(now),
            history: HistoryStore::new(),
            prefs: UserPrefs::default(),
            clock: Clock::new(),
            rng: DriftRng::default(),
        }
    }

    /// Create with a specific RNG seed
    pub fn with_seed(now: Timestamp, seed: u64) -> Self {
        Self {
            rng: DriftRng::new(seed),
            ..Self::new(now)
        }
    }

    /// Get the current tick
    pub fn current_tick(&self) -> Tick {
        self.clock.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TravelLog, TravelOutcome, Warning};

    #[test]
    fn test_ron_round_trip() {
        let mut model = Model::with_seed(Timestamp::new(2025, 6, 1), 42);
        model.status.add_warning(Warning::critical(
            "w-1",
            "Emergency mode activated. System in safe state.",
            4,
        ));
        model.target.select_preset("renaissance");
        model.history.add_log(TravelLog::new(
            "log-1",
            "Paris, 1889 - World's Fair",
            2,
            120,
            TravelOutcome::Completed,
        ));
        model.prefs.toggle_sound();

        let encoded =
            ron::ser::to_string_pretty(&model, ron::ser::PrettyConfig::default()).unwrap();
        let decoded: Model = ron::from_str(&encoded).unwrap();
        assert_eq!(decoded, model);
    }
}
