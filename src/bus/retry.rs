//! Bounded-retry register transactions over an exclusively-owned I2C bus.
//!
//! Every public operation retries a *complete* transaction (start, address,
//! payload, stop) until it succeeds or a wall-clock budget elapses.  There
//! is no backoff between attempts — whether to sleep is the scheduling
//! layer's call, not this one's.  At least one attempt is always made, even
//! with a zero budget, so a fresh port can never fail without touching the
//! bus.
//!
//! The budget is checked by polling [`Clock::now_ms`] after each attempt
//! rather than by a hardware timer, so worst-case blocking exceeds the
//! nominal budget by up to one transaction's duration.

use embedded_hal::i2c::{Error as _, I2c};
use heapless::HistoryBuffer;
use log::{debug, warn};

use crate::app::ports::Clock;
use crate::config::SystemConfig;

use super::{BusStatus, BusTimeout};

/// Depth of the per-port status history ring (diagnostics only).
const STATUS_HISTORY: usize = 16;

/// Retry policy for one bus port.
#[derive(Debug, Clone, Copy)]
pub struct BusConfig {
    /// Wall-clock retry budget per operation, in milliseconds.
    pub budget_ms: u64,
    /// Optional hard cap on attempts per operation (`None` = wall clock
    /// alone decides).
    pub max_attempts: Option<u32>,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            budget_ms: 1_000,
            max_attempts: None,
        }
    }
}

impl From<&SystemConfig> for BusConfig {
    fn from(cfg: &SystemConfig) -> Self {
        Self {
            budget_ms: cfg.bus_budget_ms,
            max_attempts: cfg.bus_max_attempts,
        }
    }
}

/// Retrying register read/write port over an addressed I2C device.
///
/// Owns the transport exclusively — nothing else may transact on the bus
/// while an operation is in flight.
pub struct BoundedBusPort<I2C, C> {
    i2c: I2C,
    clock: C,
    config: BusConfig,
    status: BusStatus,
    history: HistoryBuffer<BusStatus, STATUS_HISTORY>,
}

impl<I2C, C> BoundedBusPort<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    pub fn new(i2c: I2C, clock: C, config: BusConfig) -> Self {
        Self {
            i2c,
            clock,
            config,
            status: BusStatus::Ok,
            history: HistoryBuffer::new(),
        }
    }

    /// Write one register: `[reg, value]` in a single transaction.
    pub fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), BusTimeout> {
        self.run(|i2c| i2c.write(addr, &[reg, value]))
    }

    /// Read one register: combined write-read of the register pointer.
    pub fn read_register(&mut self, addr: u8, reg: u8) -> Result<u8, BusTimeout> {
        let mut buf = [0u8; 1];
        self.run(|i2c| i2c.write_read(addr, &[reg], &mut buf))?;
        Ok(buf[0])
    }

    /// Set or clear a single bit via byte-level read-modify-write.
    ///
    /// Two bounded operations back to back; worst case blocks for two
    /// budgets.  Not atomic; this port is the bus's only master.
    pub fn write_bit(&mut self, addr: u8, reg: u8, bit: u8, value: bool) -> Result<(), BusTimeout> {
        let current = self.read_register(addr, reg)?;
        let updated = if value {
            current | (1 << bit)
        } else {
            current & !(1 << bit)
        };
        self.write_register(addr, reg, updated)
    }

    /// Read a single bit of a register.
    pub fn read_bit(&mut self, addr: u8, reg: u8, bit: u8) -> Result<bool, BusTimeout> {
        Ok(self.read_register(addr, reg)? & (1 << bit) != 0)
    }

    /// Presence check: empty write to the device address, retried within
    /// its own budget.  Used at start-up, where devices coming out of
    /// power-on reset warrant a much longer wait than a normal operation.
    pub fn probe(&mut self, addr: u8, budget_ms: u64) -> Result<(), BusTimeout> {
        let saved = self.config.budget_ms;
        self.config.budget_ms = budget_ms;
        let result = self.run(|i2c| i2c.write(addr, &[]));
        self.config.budget_ms = saved;
        result
    }

    /// Status of the most recent transaction attempt.
    pub fn last_status(&self) -> BusStatus {
        self.status
    }

    /// Recent per-attempt statuses, oldest first (diagnostics).
    pub fn recent_statuses(&self) -> impl Iterator<Item = &BusStatus> {
        self.history.oldest_ordered()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Run one operation to completion within the retry budget.
    fn run(
        &mut self,
        mut attempt: impl FnMut(&mut I2C) -> Result<(), I2C::Error>,
    ) -> Result<(), BusTimeout> {
        let deadline = self.clock.now_ms().saturating_add(self.config.budget_ms);
        let mut attempts: u32 = 0;

        loop {
            attempts = attempts.saturating_add(1);
            match attempt(&mut self.i2c) {
                Ok(()) => {
                    self.record(BusStatus::Ok);
                    return Ok(());
                }
                Err(e) => {
                    debug!("bus attempt {attempts} failed: {:?}", e.kind());
                    self.record(BusStatus::Nack);
                }
            }

            // Deadline is checked after the attempt: one try is always made.
            if self.clock.now_ms() >= deadline {
                break;
            }
            if let Some(cap) = self.config.max_attempts {
                if attempts >= cap {
                    break;
                }
            }
        }

        self.record(BusStatus::Timeout);
        warn!("bus operation gave up after {attempts} attempt(s)");
        Err(BusTimeout { attempts })
    }

    fn record(&mut self, status: BusStatus) {
        self.status = status;
        self.history.write(status);
    }
}
