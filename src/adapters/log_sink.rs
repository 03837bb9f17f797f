//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! logger (UART / USB-CDC in production).  The excluded websocket broadcast
//! layer would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(s) => {
                info!(
                    "START | indicator={} wanted={} actual={}",
                    if s.indicator_on { "on" } else { "off" },
                    s.wanted,
                    s.actual,
                );
            }
            AppEvent::IndicatorToggled(on) => {
                info!("INDICATOR | {}", if *on { "on" } else { "off" });
            }
            AppEvent::HeadingChanged { from, to } => {
                info!("HEADING | {} -> {}", from, to);
            }
        }
    }
}
