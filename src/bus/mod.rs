//! Register-level I2C bus driver with bounded-retry semantics.
//!
//! Layering, bottom up:
//!
//! ```text
//!   embedded_hal::i2c::I2c      raw transport (byte-reliable, no retry)
//!   BoundedBusPort              complete-transaction retry within a
//!                               wall-clock budget (retry.rs)
//!   Tca9539                     typed register map of the port expander
//!                               (expander.rs)
//! ```
//!
//! The transport is owned exclusively by [`BoundedBusPort`]: at most one
//! logical transaction is ever in flight, and ordering is simply the
//! control-cycle order.

pub mod expander;
pub mod retry;

#[cfg(test)]
pub(crate) mod testutil;

pub use expander::{PinMode, Port, Register, Tca9539};
pub use retry::{BoundedBusPort, BusConfig};

use core::fmt;

/// Completion status of the most recent bus transaction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusStatus {
    /// Last transaction completed and was acknowledged.
    #[default]
    Ok,
    /// The device did not acknowledge, or the transaction failed mid-flight.
    /// Sub-kinds go to the log only; callers never see them.
    Nack,
    /// The retry budget for an operation was exhausted.
    Timeout,
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Nack => write!(f, "nack"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// A bus operation ran out of retry budget.
///
/// Never fatal: the caller must treat the addressed device's state as
/// unknown and retry on a later cycle.  Carries the number of complete
/// transactions attempted before giving up (always at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusTimeout {
    pub attempts: u32,
}

impl fmt::Display for BusTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus transaction failed after {} attempt(s)", self.attempts)
    }
}

impl core::error::Error for BusTimeout {}
