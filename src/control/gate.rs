//! Safety gate consulted before every relay actuation.
//!
//! The gate answers one question: may the mast switch from `from` to `to`
//! right now?  A denial is not an error — the reconciliation loop simply
//! re-asks on the next cycle, so a gate can hold a switch back for as long
//! as a travel limit, rotation-in-progress flag, or fault latch demands.

use crate::heading::Heading;

/// Predicate that must hold before an actuation is permitted.
pub trait SwitchGate {
    /// May the mast switch from `from` to `to` on this cycle?
    fn can_switch(&mut self, from: Heading, to: Heading) -> bool;
}

/// Gate that permits every switch.
///
/// This board has no travel limits or fault feedback wired up, so the
/// production gate is unconditional.  Interlocks slot in by replacing this
/// type, not by touching the controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysPermit;

impl SwitchGate for AlwaysPermit {
    fn can_switch(&mut self, _from: Heading, _to: Heading) -> bool {
        true
    }
}
