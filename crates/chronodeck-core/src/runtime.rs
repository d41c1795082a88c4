//! Single-threaded runtime for the dashboard update protocol
//!
//! All mutations execute synchronously inside `update`; nothing runs
//! concurrently with anything else. The drift simulation reads current store
//! values at mutation time, never from a captured snapshot.

use crate::{sim, HistoryMsg, Model, Msg, PrefsMsg, StatusMsg, TargetMsg};
use std::collections::VecDeque;

/// Dirty set produced by an update cycle
///
/// Views re-read only the slices flagged here; the storage layer persists
/// preferences when `prefs` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changed {
    pub status: bool,
    pub target: bool,
    pub history: bool,
    pub prefs: bool,
}

impl Changed {
    /// Create an empty dirty set
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether any slice changed
    pub fn any(&self) -> bool {
        self.status || self.target || self.history || self.prefs
    }

    /// Fold another dirty set into this one
    pub fn merge(&mut self, other: Changed) {
        self.status |= other.status;
        self.target |= other.target;
        self.history |= other.history;
        self.prefs |= other.prefs;
    }
}

/// The runtime that processes messages and updates the model
#[derive(Debug, Default)]
pub struct Runtime {
    /// Pending messages to process
    queue: VecDeque<Msg>,
}

impl Runtime {
    /// Create a new runtime
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message for processing
    pub fn send(&mut self, msg: impl Into<Msg>) {
        self.queue.push_back(msg.into());
    }

    /// Number of queued messages
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance the session by one tick, then drain the queue
    pub fn tick(&mut self, model: &mut Model) -> Changed {
        self.send(Msg::Tick);
        self.process_queue(model)
    }

    /// Process all messages in the queue
    pub fn process_queue(&mut self, model: &mut Model) -> Changed {
        let mut changed = Changed::none();
        while let Some(msg) = self.queue.pop_front() {
            changed.merge(self.update(model, msg));
        }
        changed
    }

    /// Process a single message
    pub fn update(&mut self, model: &mut Model, msg: Msg) -> Changed {
        let mut changed = Changed::none();

        match msg {
            Msg::Tick => {
                model.clock.advance();
                if model.clock.is_sim_tick() {
                    sim::drift(&mut model.status, &mut model.rng);
                    changed.status = true;
                }
            }
            Msg::Status(msg) => {
                changed.status = Self::update_status(model, msg);
            }
            Msg::Target(msg) => {
                changed.target = Self::update_target(model, msg);
            }
            Msg::History(msg) => {
                changed.history = Self::update_history(model, msg);
            }
            Msg::Prefs(msg) => {
                Self::update_prefs(model, msg);
                changed.prefs = true;
            }
        }

        changed
    }

    fn update_status(model: &mut Model, msg: StatusMsg) -> bool {
        match msg {
            StatusMsg::SetHealth(value) => {
                model.status.set_health(value);
                true
            }
            StatusMsg::SetStability(value) => {
                model.status.set_stability(value);
                true
            }
            StatusMsg::SetPower(value) => {
                model.status.set_power(value);
                true
            }
            StatusMsg::AddWarning(warning) => {
                model.status.add_warning(warning);
                true
            }
            StatusMsg::RemoveWarning(id) => model.status.remove_warning(&id),
            StatusMsg::ClearWarnings => {
                model.status.clear_warnings();
                true
            }
        }
    }

    fn update_target(model: &mut Model, msg: TargetMsg) -> bool {
        match msg {
            TargetMsg::SetDate(date) => {
                model.target.set_target_date(date);
                true
            }
            TargetMsg::SetPosition(position) => {
                model.target.set_timeline_position(position);
                true
            }
            TargetMsg::SelectPreset(id) => model.target.select_preset(&id),
            TargetMsg::Reset => {
                model.target.reset();
                true
            }
        }
    }

    fn update_history(model: &mut Model, msg: HistoryMsg) -> bool {
        match msg {
            HistoryMsg::Add(log) => {
                model.history.add_log(log);
                true
            }
            HistoryMsg::Remove(id) => model.history.remove_log(&id),
            HistoryMsg::Clear => {
                model.history.clear_logs();
                true
            }
        }
    }

    fn update_prefs(model: &mut Model, msg: PrefsMsg) {
        match msg {
            PrefsMsg::SetTheme(theme) => model.prefs.set_theme(theme),
            PrefsMsg::ToggleAnimations => model.prefs.toggle_animations(),
            PrefsMsg::ToggleSound => model.prefs.toggle_sound(),
            PrefsMsg::ToggleNotifications => model.prefs.toggle_notifications(),
            PrefsMsg::Reset => model.prefs.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Theme, Timestamp, Warning, SIM_INTERVAL};

    fn model() -> Model {
        Model::with_seed(Timestamp::new(2025, 6, 1), 42)
    }

    #[test]
    fn test_tick_runs_simulation_on_interval() {
        let mut model = model();
        let mut runtime = Runtime::new();
        let before = model.status.clone();

        // Ticks 1 and 2: clock advances, no drift yet
        assert!(!runtime.tick(&mut model).status);
        assert!(!runtime.tick(&mut model).status);
        assert_eq!(model.status, before);

        // Tick 3: drift runs
        let changed = runtime.tick(&mut model);
        assert!(changed.status);
        assert_eq!(model.current_tick(), SIM_INTERVAL);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut model = model();
        let mut runtime = Runtime::new();

        runtime.send(StatusMsg::AddWarning(Warning::info("w-1", "first", 0)));
        runtime.send(StatusMsg::AddWarning(Warning::info("w-2", "second", 0)));
        assert_eq!(runtime.pending(), 2);

        let changed = runtime.process_queue(&mut model);
        assert!(changed.status);
        assert_eq!(runtime.pending(), 0);
        // Newest first after both inserts
        assert_eq!(model.status.warnings()[0].id, "w-2");
    }

    #[test]
    fn test_noop_messages_do_not_dirty() {
        let mut model = model();
        let mut runtime = Runtime::new();

        let changed = runtime.update(&mut model, Msg::Status(StatusMsg::RemoveWarning("w-9".into())));
        assert!(!changed.any());

        let changed = runtime.update(
            &mut model,
            Msg::Target(TargetMsg::SelectPreset("jurassic".into())),
        );
        assert!(!changed.any());

        let changed = runtime.update(&mut model, Msg::History(HistoryMsg::Remove("log-9".into())));
        assert!(!changed.any());
    }

    #[test]
    fn test_prefs_messages_flag_prefs() {
        let mut model = model();
        let mut runtime = Runtime::new();

        let changed = runtime.update(&mut model, Msg::Prefs(PrefsMsg::SetTheme(Theme::Light)));
        assert!(changed.prefs);
        assert!(!changed.status);
        assert_eq!(model.prefs.theme, Theme::Light);
    }

    #[test]
    fn test_changed_merge() {
        let mut changed = Changed::none();
        assert!(!changed.any());

        changed.merge(Changed {
            target: true,
            ..Changed::none()
        });
        changed.merge(Changed {
            prefs: true,
            ..Changed::none()
        });

        assert!(changed.target);
        assert!(changed.prefs);
        assert!(!changed.status);
        assert!(!changed.history);
    }

    #[test]
    fn test_preset_selection_via_protocol_is_atomic() {
        let mut model = model();
        let mut runtime = Runtime::new();

        let changed = runtime.update(
            &mut model,
            Msg::Target(TargetMsg::SelectPreset("present".into())),
        );
        assert!(changed.target);
        assert_eq!(model.target.timeline_position(), 50.0);
        assert_eq!(model.target.target_date(), Timestamp::new(2025, 6, 1));
    }
}
