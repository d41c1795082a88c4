//! Dashboard Demo
//!
//! Drives a full chronodeck session from the console: the drift simulation,
//! operator warnings, preset selection, history filtering, and persisted
//! preferences.

use chronodeck_catalog::Loader;
use chronodeck_core::{
    HistoryMsg, MetricLevel, Model, PrefsMsg, StatusMsg, TargetMsg, Theme, Timestamp, TravelLog,
    TravelOutcome, Warning,
};
use chronodeck_db::Store;
use chronodeck_session::Session;

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
            id: "worlds-fair",
            name: "Paris World's Fair",
            date: (1889, 5, 6),
            timeline_position: 42.0,
        ),
        (
            id: "present",
            name: "Present Day",
            date: (2025, 6, 1),
            timeline_position: 50.0,
        ),
        (
            id: "mars-colony",
            name: "Mars Colony",
            date: (2150, 3, 12),
            timeline_position: 82.0,
        ),
    ]
)
"#;

fn main() {
    println!("=== Chronodeck Dashboard Demo ===\n");

    // Build the model with a catalog loaded from RON
    let now = Timestamp::new(2025, 6, 1);
    let mut loader = Loader::new();
    loader.load_str(CATALOG).unwrap();

    let mut model = Model::with_seed(now, 42);
    model.target = chronodeck_core::TargetStore::with_catalog(now, loader.finish());

    let store = Store::in_memory().unwrap();
    let mut session = Session::with_store(model, store);

    // Seed some travel history
    let samples = [
        TravelLog::new(
            "log-1",
            "Paris, 1889 - World's Fair",
            0,
            120,
            TravelOutcome::Completed,
        )
        .with_notes("Successful jump to the Eiffel Tower inauguration."),
        TravelLog::new(
            "log-2",
            "Mesozoic Era - Late Cretaceous",
            0,
            45,
            TravelOutcome::Failed,
        )
        .with_notes("Instability detected. Jump aborted for safety."),
        TravelLog::new("log-3", "Mars Colony, 2150", 0, 38, TravelOutcome::Aborted)
            .with_notes("User initiated emergency return protocol."),
    ];
    for log in samples {
        session.dispatch(HistoryMsg::Add(log)).unwrap();
    }

    // Run the drift simulation for a while
    println!("Running drift simulation for 9 ticks...\n");
    for _ in 0..9 {
        session.tick().unwrap();

        let status = &session.model().status;
        println!(
            "Tick {}: health {:.1} ({:?}), stability {:.1} ({:?}), power {:.1} ({:?})",
            session.model().current_tick(),
            status.health(),
            MetricLevel::of(status.health()),
            status.stability(),
            MetricLevel::of(status.stability()),
            status.power(),
            MetricLevel::of(status.power()),
        );
    }

    // Operator triggers emergency mode, then stands down
    println!("\nActivating emergency mode...");
    let tick = session.model().current_tick();
    session
        .dispatch(StatusMsg::AddWarning(Warning::critical(
            "w-emergency",
            "Emergency mode activated. System in safe state.",
            tick,
        )))
        .unwrap();
    for warning in session.model().status.warnings() {
        println!("  [{:?}] {}", warning.kind, warning.message);
    }

    println!("Standing down, clearing warnings...");
    session.dispatch(StatusMsg::ClearWarnings).unwrap();

    // Pick a destination
    println!("\nSelecting preset 'worlds-fair'...");
    session
        .dispatch(TargetMsg::SelectPreset("worlds-fair".into()))
        .unwrap();
    let target = &session.model().target;
    println!(
        "  Target {} at position {:.0} (deviation {})",
        target.target_date(),
        target.timeline_position(),
        target.deviation_label(),
    );

    // Filter the travel history
    println!("\nFailed jumps mentioning 'mesozoic':");
    let query = chronodeck_core::LogQuery::all()
        .with_outcome(TravelOutcome::Failed)
        .with_search("mesozoic");
    for log in session.model().history.query(&query) {
        println!(
            "  {} ({}s, {})",
            log.destination,
            log.duration_secs,
            log.outcome.as_str(),
        );
    }

    // Preferences persist through the backing store
    println!("\nSwitching theme to light and muting sound...");
    session.dispatch(PrefsMsg::SetTheme(Theme::Light)).unwrap();
    session.dispatch(PrefsMsg::ToggleSound).unwrap();
    let prefs = &session.model().prefs;
    println!(
        "  theme {:?}, animations {}, sound {}, notifications {}",
        prefs.theme, prefs.animations_enabled, prefs.sound_enabled, prefs.notifications_enabled,
    );

    session.close().unwrap();
    println!("\n=== Session Closed ===");
}
