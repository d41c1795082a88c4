//! Chronodeck Core - state stores for a time-travel operations dashboard
//!
//! This crate provides the dashboard's client-side state and its update
//! protocol:
//! - `StatusStore` - simulated vital signs with a bounded warning queue
//! - `TargetStore` - destination date, timeline position, and preset catalog
//! - `HistoryStore` - newest-first travel log with filtered queries
//! - `UserPrefs` - display preferences with a fixed default tuple
//! - Tick-based clock, deterministic RNG, and metric drift simulation
//! - Typed `Msg` protocol processed by a single-threaded `Runtime`
//!
//! Store operations are total functions: out-of-range numeric input is
//! clamped rather than rejected, and lookups by unknown id are silent
//! no-ops. Views consume derived read-side transforms (`MetricLevel`,
//! timeline deviation, log queries) and re-read only the state slices
//! flagged in `Changed` after each update cycle.

mod history;
mod model;
mod msg;
mod prefs;
mod rng;
mod runtime;
mod sim;
mod status;
mod target;
mod time;

pub use history::{HistoryStore, LogQuery, OutcomeFilter, TravelLog, TravelOutcome};
pub use model::Model;
pub use msg::{HistoryMsg, Msg, PrefsMsg, StatusMsg, TargetMsg};
pub use prefs::{Theme, UserPrefs};
pub use rng::DriftRng;
pub use runtime::{Changed, Runtime};
pub use sim::{DriftParams, HEALTH_DRIFT, POWER_DRIFT, SIM_INTERVAL, STABILITY_DRIFT};
pub use status::{MetricLevel, StatusStore, Warning, WarningKind, MAX_WARNINGS};
pub use target::{PresetPeriod, TargetStore};
pub use time::{Clock, Tick, Timestamp};
