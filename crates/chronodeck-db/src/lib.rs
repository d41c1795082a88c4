//! Chronodeck DB - durable local storage for user preferences
//!
//! Preferences are the only persisted state: one versioned record under a
//! fixed namespace key, written synchronously on every preference mutation
//! and read back at session start. Readers must treat a missing or
//! unreadable record as "use defaults", never as a failure.

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use models::{StoredPrefs, PREFS_KEY};
pub use store::Store;
