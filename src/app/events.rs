//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them — log to serial, push to websocket viewers,
//! light a strip.

use serde::Serialize;

use crate::heading::Heading;

/// Structured events emitted by the application core, one per state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial state).
    Started(StatusSnapshot),

    /// The cosmetic indicator was toggled by a button press.
    IndicatorToggled(bool),

    /// The relays were driven and the actual heading changed.
    HeadingChanged { from: Heading, to: Heading },
}

/// Point-in-time controller state, suitable for logging or transmission.
///
/// `Serialize` so the external broadcast layer can encode it; no wire
/// format is owned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub indicator_on: bool,
    pub wanted: Heading,
    pub actual: Heading,
}
