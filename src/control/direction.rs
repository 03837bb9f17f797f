//! Wanted-vs-actual heading reconciliation.
//!
//! The controller holds the only mutable copy of the direction state:
//! `wanted` follows the operator's selector (sticky — a transient Unknown
//! reading never clears it), and `actual` changes *only* when an actuation
//! has gone through.  Reconciliation is level-triggered: as long as the two
//! differ, every cycle re-evaluates the gate and retries the relay write,
//! with no internal retry counter and no give-up.

use log::{debug, info};

use crate::app::ports::ActuatorPort;
use crate::bus::BusTimeout;
use crate::control::gate::{AlwaysPermit, SwitchGate};
use crate::heading::Heading;

/// A realized heading switch, reported once per actuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingChange {
    pub from: Heading,
    pub to: Heading,
}

/// Reconciles the wanted heading against the actual one.
pub struct DirectionController {
    wanted: Heading,
    actual: Heading,
    gate: Box<dyn SwitchGate>,
}

impl DirectionController {
    /// Controller with the unconditional production gate.
    pub fn new() -> Self {
        Self::with_gate(Box::new(AlwaysPermit))
    }

    /// Controller with an injected gate (interlocks, tests).
    pub fn with_gate(gate: Box<dyn SwitchGate>) -> Self {
        Self {
            wanted: Heading::Unknown,
            actual: Heading::Unknown,
            gate,
        }
    }

    /// Take note of a selector reading.
    ///
    /// Unknown readings are ignored: the last valid selection stays wanted
    /// until the operator picks another position.
    pub fn select(&mut self, reading: Heading) {
        if reading.is_known() && reading != self.wanted {
            info!("selector moved: wanted {} -> {}", self.wanted, reading);
            self.wanted = reading;
        }
    }

    /// Close the gap between wanted and actual, if the gate permits.
    ///
    /// Returns `Ok(Some(change))` when the relays were driven and `actual`
    /// updated — the caller notifies exactly once per such change.
    /// `Ok(None)` means nothing to do (already aligned, nothing selected
    /// yet, or gate denial — re-evaluated next cycle).  A bus failure
    /// leaves `actual` untouched; the previous relay state must be assumed
    /// unknown and the write is retried on the next cycle.
    pub fn reconcile(
        &mut self,
        actuators: &mut impl ActuatorPort,
    ) -> Result<Option<HeadingChange>, BusTimeout> {
        if self.wanted == self.actual || !self.wanted.is_known() {
            return Ok(None);
        }
        if !self.gate.can_switch(self.actual, self.wanted) {
            debug!("switch {} -> {} held back by gate", self.actual, self.wanted);
            return Ok(None);
        }

        actuators.drive_heading(self.wanted)?;

        let change = HeadingChange {
            from: self.actual,
            to: self.wanted,
        };
        self.actual = self.wanted;
        info!("rotator switched {} -> {}", change.from, change.to);
        Ok(Some(change))
    }

    /// Heading the operator has selected.
    pub fn wanted(&self) -> Heading {
        self.wanted
    }

    /// Heading the relays currently realize.
    pub fn actual(&self) -> Heading {
        self.actual
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new()
    }
}
