//! Shared test doubles for the bus layer: a scriptable in-memory I2C
//! device and a deterministic clock.  Compiled for unit tests only.

use core::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::i2c::{
    self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress,
};

use crate::app::ports::Clock;

// ── FakeClock ─────────────────────────────────────────────────

/// Deterministic millisecond clock.
///
/// With `step == 0` the clock is frozen and driven via [`handle`];
/// [`stepping`] advances it by a fixed amount on every read, which models
/// "each transaction takes this long" without real sleeping.
#[derive(Clone)]
pub struct FakeClock {
    now: Rc<Cell<u64>>,
    step: u64,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            step: 0,
        }
    }

    pub fn stepping(step: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            step,
        }
    }

    /// Shared handle for advancing the frozen clock from the test body.
    pub fn handle(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.now)
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        let t = self.now.get();
        self.now.set(t.saturating_add(self.step));
        t
    }
}

// ── MockI2c ───────────────────────────────────────────────────

/// Error type surfaced by [`MockI2c`].
#[derive(Debug)]
pub struct MockI2cError(pub ErrorKind);

impl i2c::Error for MockI2cError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// In-memory register-file device behind the `embedded-hal` I2C trait.
///
/// Behaves like the expander's wire protocol: a write's first byte selects
/// the register, further bytes store into it, and a read returns the
/// selected register.  Failure injection covers both "fail the next N
/// transactions" and "fail forever".
pub struct MockI2c {
    pub regs: [u8; 8],
    selected: u8,
    /// Fail this many transactions before succeeding again.
    pub fail_next: u32,
    /// Fail every transaction (budget-exhaustion scenarios).
    pub fail_always: bool,
    /// Every write transaction's payload, for order-of-operations asserts.
    pub writes: Vec<Vec<u8>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            regs: [0; 8],
            selected: 0,
            fail_next: 0,
            fail_always: false,
            writes: Vec::new(),
        }
    }
}

impl ErrorType for MockI2c {
    type Error = MockI2cError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        _address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_always {
            return Err(MockI2cError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(MockI2cError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    self.writes.push(bytes.to_vec());
                    if let Some((&reg, rest)) = bytes.split_first() {
                        self.selected = reg % 8;
                        if let Some(&value) = rest.first() {
                            self.regs[usize::from(self.selected)] = value;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.regs[usize::from(self.selected)];
                    }
                }
            }
        }
        Ok(())
    }
}
