//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the button classifier, the rotary selector, and the
//! direction controller, and exposes a clean, hardware-agnostic API.  All
//! I/O flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!                 │         AppService          │
//! ActuatorPort ◀──│ Debounce · Select · Direct  │
//!                 └─────────────────────────────┘
//! ```
//!
//! One call to [`tick`](AppService::tick) is one control cycle.  The cycle
//! is strictly ordered: input sampling, debounce classification, direction
//! reconciliation (including any bus I/O), notification.  A stalled bus
//! blocks the whole cycle for up to its retry budget; there is exactly one
//! loop and one bus, and the next cycle simply starts late.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::control::direction::DirectionController;
use crate::heading::Heading;
use crate::input::debounce::DebouncedInput;
use crate::input::rotary::RotarySelector;

use super::events::{AppEvent, StatusSnapshot};
use super::ports::{ActuatorPort, EventSink, InputPort};

/// Orchestrates all domain logic, one cycle at a time.
pub struct AppService {
    button: DebouncedInput,
    selector: RotarySelector,
    controller: DirectionController,
    indicator_on: bool,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration, with the unconditional
    /// production gate.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_controller(config, DirectionController::new())
    }

    /// Construct with a custom-gated controller (interlocks, tests).
    pub fn with_controller(config: &SystemConfig, controller: DirectionController) -> Self {
        Self {
            button: DebouncedInput::new(config.debounce_window_ms, config.button_active_low),
            selector: RotarySelector::new(),
            controller,
            indicator_on: false,
            tick_count: 0,
        }
    }

    /// Announce the initial state.  Call once, before the first `tick`.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let status = self.build_status();
        sink.emit(&AppEvent::Started(status));
        info!("controller started: {:?}", status);
    }

    /// Run one full control cycle.
    ///
    /// The `hw` parameter satisfies **both** [`InputPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.  `now_ms` is the cycle's timestamp from
    /// the [`Clock`](super::ports::Clock) port.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl InputPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample every input line via InputPort.
        let snapshot = hw.read_inputs();

        // 2. Button classification; a press edge toggles the indicator.
        self.button.poll(snapshot.button_level, now_ms);
        if self.button.is_press_edge() {
            self.indicator_on = !self.indicator_on;
            hw.set_indicator(self.indicator_on);
            sink.emit(&AppEvent::IndicatorToggled(self.indicator_on));
        }

        // 3. Selector classification feeds the wanted heading (sticky).
        let reading = self.selector.sample(&snapshot.rotary_levels);
        self.controller.select(reading);

        // 4. Reconcile wanted vs actual; notify exactly once per change.
        match self.controller.reconcile(hw) {
            Ok(Some(change)) => sink.emit(&AppEvent::HeadingChanged {
                from: change.from,
                to: change.to,
            }),
            Ok(None) => {}
            Err(e) => warn!(
                "actuation failed ({e}); holding {} and retrying next cycle",
                self.controller.actual()
            ),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current controller state for the notification/UI layer.
    pub fn build_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            indicator_on: self.indicator_on,
            wanted: self.controller.wanted(),
            actual: self.controller.actual(),
        }
    }

    /// Heading the operator has selected.
    pub fn wanted(&self) -> Heading {
        self.controller.wanted()
    }

    /// Heading the relays currently realize.
    pub fn actual(&self) -> Heading {
        self.controller.actual()
    }

    /// Cosmetic indicator state.
    pub fn indicator_on(&self) -> bool {
        self.indicator_on
    }

    /// Current button classification, for callers that care about holds.
    pub fn button(&self) -> &DebouncedInput {
        &self.button
    }

    /// Total control cycles executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
