//! Travel history store
//!
//! An append-only log of past travel attempts, newest first. Entries are
//! created already in a terminal outcome and never mutated; they can only be
//! removed individually or in bulk. Queries filter without mutating.

use crate::Tick;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a recorded travel attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelOutcome {
    Completed,
    Failed,
    Aborted,
}

impl TravelOutcome {
    /// Lowercase label used in filters and display
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelOutcome::Completed => "completed",
            TravelOutcome::Failed => "failed",
            TravelOutcome::Aborted => "aborted",
        }
    }
}

/// One recorded travel attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLog {
    pub id: String,
    pub destination: String,
    pub occurred_at: Tick,
    pub duration_secs: u32,
    pub outcome: TravelOutcome,
    pub notes: Option<String>,
}

impl TravelLog {
    /// Create a new log entry without notes
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        occurred_at: Tick,
        duration_secs: u32,
        outcome: TravelOutcome,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            occurred_at,
            duration_secs,
            outcome,
            notes: None,
        }
    }

    /// Attach operator notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Outcome predicate for log queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutcomeFilter {
    /// Wildcard: accept every outcome
    #[default]
    All,
    /// Accept only the named outcome
    Only(TravelOutcome),
}

impl OutcomeFilter {
    /// Whether this filter accepts the given outcome
    pub fn accepts(&self, outcome: TravelOutcome) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Only(only) => *only == outcome,
        }
    }
}

/// View-side query over the history log
///
/// Both predicates are combined with logical AND; the search text is a
/// case-insensitive substring match on the destination. An empty result set
/// is a normal display state, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQuery {
    pub outcome: OutcomeFilter,
    pub search: String,
}

impl LogQuery {
    /// Query accepting everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a single outcome
    pub fn with_outcome(mut self, outcome: TravelOutcome) -> Self {
        self.outcome = OutcomeFilter::Only(outcome);
        self
    }

    /// Restrict to destinations containing `search` (case-insensitive)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Newest-first log of travel attempts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStore {
    logs: Vec<TravelLog>,
}

impl HistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, newest first
    pub fn logs(&self) -> &[TravelLog] {
        &self.logs
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Prepend an entry (newest-first invariant ordering)
    pub fn add_log(&mut self, log: TravelLog) {
        self.logs.insert(0, log);
    }

    /// Remove the entry with a matching id; no-op if absent
    pub fn remove_log(&mut self, id: &str) -> bool {
        match self.logs.iter().position(|log| log.id == id) {
            Some(index) => {
                self.logs.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empty the log
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Entries matching the query, in stored (newest-first) order
    pub fn query(&self, query: &LogQuery) -> Vec<&TravelLog> {
        let needle = query.search.to_lowercase();
        self.logs
            .iter()
            .filter(|log| {
                query.outcome.accepts(log.outcome)
                    && (needle.is_empty() || log.destination.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
