//! Integration tests for the debounced button → indicator toggle path,
//! driven through the full AppService cycle at realistic tick cadence.

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use rotorctl::app::events::AppEvent;
use rotorctl::app::service::AppService;
use rotorctl::config::SystemConfig;

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
fn press_toggles_indicator_exactly_once() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 5);
    assert_eq!(sink.indicator_toggles(), 0);

    // Hold the button down across many cycles: one toggle, not one per cycle.
    hw.set_button_pressed(true);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 20);

    assert!(app.indicator_on());
    assert_eq!(sink.indicator_toggles(), 1);
    assert_eq!(hw.indicator(), Some(true));
    assert!(
        sink.events.contains(&AppEvent::IndicatorToggled(true)),
        "the sink must see the new indicator state"
    );
}

#[test]
fn release_does_not_toggle() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.set_button_pressed(true);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 5);
    hw.set_button_pressed(false);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 10);

    assert!(app.indicator_on(), "release leaves the indicator alone");
    assert_eq!(sink.indicator_toggles(), 1);
}

#[test]
fn second_press_toggles_back_off() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    for expect_on in [true, false, true] {
        hw.set_button_pressed(true);
        run_cycles(&mut app, &mut hw, &mut sink, &mut t, 5);
        hw.set_button_pressed(false);
        run_cycles(&mut app, &mut hw, &mut sink, &mut t, 5);
        assert_eq!(app.indicator_on(), expect_on);
    }
    assert_eq!(sink.indicator_toggles(), 3);
    assert_eq!(hw.indicator(), Some(true));
}

#[test]
fn held_classification_is_visible_to_callers() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.set_button_pressed(true);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 30);

    // ~29 polls past the press edge at 50 ms cadence.
    assert!(app.button().is_held(10));
    assert!(!app.button().is_held(100));
    assert!(!app.button().is_press_edge());
}

#[test]
fn indicator_and_heading_paths_are_independent() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut t = 0;

    hw.select_position(1); // South
    hw.set_button_pressed(true);
    run_cycles(&mut app, &mut hw, &mut sink, &mut t, 10);

    assert!(app.indicator_on());
    assert_eq!(app.actual(), rotorctl::heading::Heading::South);
    assert_eq!(sink.indicator_toggles(), 1);
    assert_eq!(sink.heading_changes(), 1);

    // The relay drive and the indicator write both reached the hardware.
    assert!(hw.calls.contains(&ActuatorCall::SetIndicator(true)));
    assert!(hw
        .calls
        .iter()
        .any(|c| matches!(c, ActuatorCall::Drive(_))));
}
