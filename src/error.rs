#![allow(dead_code)] // Init/Config variants reserved for typed bootstrap returns

//! Unified error types for the rotator firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! top-level error handling uniform.  All variants are `Copy` so they can
//! pass through the control loop without allocation.  Note that nothing in
//! the steady-state loop is allowed to fail fatally: a bus timeout holds
//! the last known state and retries next cycle.

use core::fmt;

use crate::bus::BusTimeout;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bus operation exhausted its retry budget.
    Bus(BusTimeout),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<BusTimeout> for Error {
    fn from(e: BusTimeout) -> Self {
        Self::Bus(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
