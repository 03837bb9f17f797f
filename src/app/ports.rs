//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (GPIO sampling, the relay bank, event sinks, the system
//! timer) implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly — the excluded collaborators (web server, websocket broadcast,
//! LED strip rendering) sit entirely on the adapter side of this line.

use crate::app::events::AppEvent;
use crate::bus::BusTimeout;
use crate::heading::Heading;
use crate::input::InputSnapshot;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw digital levels for the button and rotary lines.
pub trait InputPort {
    /// Sample every input line once.  Called exactly once per cycle.
    fn read_inputs(&mut self) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands actuators through this.
pub trait ActuatorPort {
    /// Energise exactly the relay for `heading` (all relays released for
    /// `Unknown`).  Bounded-retry: may block for up to the bus budget and
    /// fails with [`BusTimeout`] rather than ever aborting.
    fn drive_heading(&mut self, heading: Heading) -> Result<(), BusTimeout>;

    /// Set the cosmetic indicator LED.
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → notification layer)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`AppEvent`]s through this port, only on state change.
/// Adapters decide where they go — the serial log in this crate, a
/// websocket broadcast in the excluded web layer.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic milliseconds since boot.
pub trait Clock {
    fn now_ms(&self) -> u64;
}
