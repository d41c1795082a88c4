//! Typed messages for the dashboard update protocol
//!
//! Every store mutation enters the system as a message; the runtime applies
//! them synchronously, one at a time.

use crate::{Theme, Timestamp, TravelLog, Warning};
use serde::{Deserialize, Serialize};

/// Status store mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusMsg {
    SetHealth(f64),
    SetStability(f64),
    SetPower(f64),
    AddWarning(Warning),
    RemoveWarning(String),
    ClearWarnings,
}

/// Time-target store mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetMsg {
    SetDate(Timestamp),
    SetPosition(f64),
    SelectPreset(String),
    Reset,
}

/// History store mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryMsg {
    Add(TravelLog),
    Remove(String),
    Clear,
}

/// Preference store mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrefsMsg {
    SetTheme(Theme),
    ToggleAnimations,
    ToggleSound,
    ToggleNotifications,
    Reset,
}

/// A message in the dashboard update protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    /// Advance the session clock (runs the drift simulation when due)
    Tick,
    Status(StatusMsg),
    Target(TargetMsg),
    History(HistoryMsg),
    Prefs(PrefsMsg),
}

impl From<StatusMsg> for Msg {
    fn from(msg: StatusMsg) -> Self {
        Msg::Status(msg)
    }
}

impl From<TargetMsg> for Msg {
    fn from(msg: TargetMsg) -> Self {
        Msg::Target(msg)
    }
}

impl From<HistoryMsg> for Msg {
    fn from(msg: HistoryMsg) -> Self {
        Msg::History(msg)
    }
}

impl From<PrefsMsg> for Msg {
    fn from(msg: PrefsMsg) -> Self {
        Msg::Prefs(msg)
    }
}
