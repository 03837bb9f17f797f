//! Integration tests for the AppService → DirectionController → actuator
//! pipeline: selector changes propagate to the relay bank exactly once,
//! gated switches hold, and bus failures degrade to retry-next-cycle.

use crate::mock_hw::{MockHardware, RecordingSink};

use rotorctl::app::events::AppEvent;
use rotorctl::app::service::AppService;
use rotorctl::config::SystemConfig;
use rotorctl::control::direction::DirectionController;
use rotorctl::control::gate::SwitchGate;
use rotorctl::heading::Heading;

/// Control-cycle cadence used by the tests (matches the default config).
const TICK_MS: u64 = 50;

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config);
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, MockHardware::new(), sink)
}

fn run_cycles(
    app: &mut AppService,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
    now_ms: &mut u64,
    cycles: u32,
) {
    for _ in 0..cycles {
        *now_ms += TICK_MS;
        app.tick(*now_ms, hw, sink);
    }
}

#[test]
fn start_reports_unknown_state_once() {
    let (app, _hw, sink) = make_app();
    assert_eq!(sink.events.len(), 1);
    assert!(matches!(sink.events[0], AppEvent::Started(s)
        if s.wanted == Heading::Unknown && s.actual == Heading::Unknown && !s.indicator_on));
    assert_eq!(app.actual(), Heading::Unknown);
}

#[test]
fn selection_is_realised_once_and_settles() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(5); // North
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 10);

    assert_eq!(app.wanted(), Heading::North);
    assert_eq!(app.actual(), Heading::North);
    // One relay write, one notification — not one per cycle.
    assert_eq!(hw.drives(), vec![Heading::North]);
    assert_eq!(sink.heading_changes(), 1);
}

#[test]
fn switching_between_positions_fires_one_event_per_change() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(2); // SouthWest
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 5);
    assert_eq!(app.actual(), Heading::SouthWest);

    hw.select_position(5); // North
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 1);
    assert_eq!(app.actual(), Heading::North);
    assert_eq!(hw.drives(), vec![Heading::SouthWest, Heading::North]);
    assert_eq!(sink.heading_changes(), 2);
    assert!(sink.events.contains(&AppEvent::HeadingChanged {
        from: Heading::SouthWest,
        to: Heading::North,
    }));
}

#[test]
fn unknown_reading_keeps_the_last_selection() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(3); // West
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 3);
    assert_eq!(app.actual(), Heading::West);

    // Knob sits between detents for a long while.
    hw.clear_selection();
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 50);

    assert_eq!(app.wanted(), Heading::West, "Unknown must not clear wanted");
    assert_eq!(app.actual(), Heading::West);
    assert_eq!(sink.heading_changes(), 1, "no re-notification while parked");
}

#[test]
fn ambiguous_selection_resolves_to_lowest_position() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    // Wiper bridges positions 3 and 5 mid-travel.
    hw.snapshot.rotary_levels = [false, false, true, false, true, false, false, false];
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 2);

    assert_eq!(app.actual(), Heading::West, "position 3 wins silently");
}

#[test]
fn denying_gate_holds_actual_across_unlimited_cycles() {
    struct DenyAll;
    impl SwitchGate for DenyAll {
        fn can_switch(&mut self, _from: Heading, _to: Heading) -> bool {
            false
        }
    }

    let config = SystemConfig::default();
    let mut app =
        AppService::with_controller(&config, DirectionController::with_gate(Box::new(DenyAll)));
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    let mut t = 0;

    hw.select_position(5);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 200);

    assert_eq!(app.wanted(), Heading::North, "selection is still tracked");
    assert_eq!(app.actual(), Heading::Unknown, "but never actuated");
    assert!(hw.drives().is_empty());
    assert_eq!(sink.heading_changes(), 0);
}

#[test]
fn bus_timeout_holds_state_and_recovers() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(2);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 3);
    assert_eq!(app.actual(), Heading::SouthWest);

    // The expander stops answering for four cycles mid-switch.
    hw.select_position(5);
    hw.fail_drives = 4;
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 4);

    assert_eq!(app.actual(), Heading::SouthWest, "failed writes must not move actual");
    assert_eq!(sink.heading_changes(), 1, "no notification for a failed switch");

    // Bus recovers: the level-triggered loop completes the switch.
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 3);
    assert_eq!(app.actual(), Heading::North);
    assert_eq!(sink.heading_changes(), 2);
    assert_eq!(hw.drives(), vec![Heading::SouthWest, Heading::North]);
}

#[test]
fn status_snapshot_tracks_the_cycle() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(7); // East
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 2);

    let status = app.build_status();
    assert_eq!(status.wanted, Heading::East);
    assert_eq!(status.actual, Heading::East);
    assert!(!status.indicator_on);
}
