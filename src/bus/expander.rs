//! TCA9539 16-bit I/O expander register model.
//!
//! Register map per the TI datasheet (SCPS229): a command byte selects one
//! of eight single-byte registers, four per 8-bit port.
//!
//! | command | register            |
//! |---------|---------------------|
//! | `0x00`  | input port 0        |
//! | `0x01`  | input port 1        |
//! | `0x02`  | output port 0       |
//! | `0x03`  | output port 1       |
//! | `0x04`  | polarity invert 0   |
//! | `0x05`  | polarity invert 1   |
//! | `0x06`  | configuration 0     |
//! | `0x07`  | configuration 1     |
//!
//! Direction convention, pinned to the datasheet: a configuration bit of
//! **1 puts the pin in input mode** (the power-on default is `0xFF`, all
//! inputs), **0 drives it as an output**.  Third-party driver headers have
//! been seen documenting the opposite; the silicon follows the datasheet.

use embedded_hal::i2c::I2c;

use crate::app::ports::Clock;

use super::retry::BoundedBusPort;
use super::{BusStatus, BusTimeout};

/// Register offsets of the TCA9539.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Input0 = 0x00,
    Input1 = 0x01,
    Output0 = 0x02,
    Output1 = 0x03,
    Polarity0 = 0x04,
    Polarity1 = 0x05,
    Config0 = 0x06,
    Config1 = 0x07,
}

/// One of the expander's two 8-bit ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Port0,
    Port1,
}

/// Pin direction as encoded in the configuration registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output,
    Input,
}

impl PinMode {
    /// Port-wide configuration byte for this mode on all eight pins.
    const fn port_byte(self) -> u8 {
        match self {
            // Datasheet: 0 = output, 1 = input.
            Self::Output => 0x00,
            Self::Input => 0xFF,
        }
    }
}

/// Typed register access to one TCA9539 at a fixed bus address.
///
/// The device address is configuration (strapped by the A0/A1 pins), not
/// runtime state.
pub struct Tca9539<I2C, C> {
    bus: BoundedBusPort<I2C, C>,
    address: u8,
}

impl<I2C, C> Tca9539<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    pub fn new(bus: BoundedBusPort<I2C, C>, address: u8) -> Self {
        Self { bus, address }
    }

    /// Presence check with its own (typically long) budget.
    pub fn probe(&mut self, budget_ms: u64) -> Result<(), BusTimeout> {
        self.bus.probe(self.address, budget_ms)
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), BusTimeout> {
        self.bus.write_register(self.address, reg as u8, value)
    }

    pub fn read_register(&mut self, reg: Register) -> Result<u8, BusTimeout> {
        self.bus.read_register(self.address, reg as u8)
    }

    pub fn write_bit(&mut self, reg: Register, bit: u8, value: bool) -> Result<(), BusTimeout> {
        self.bus.write_bit(self.address, reg as u8, bit, value)
    }

    pub fn read_bit(&mut self, reg: Register, bit: u8) -> Result<bool, BusTimeout> {
        self.bus.read_bit(self.address, reg as u8, bit)
    }

    /// Configure every pin of one port as input or output.
    pub fn set_port_mode(&mut self, port: Port, mode: PinMode) -> Result<(), BusTimeout> {
        let reg = match port {
            Port::Port0 => Register::Config0,
            Port::Port1 => Register::Config1,
        };
        self.write_register(reg, mode.port_byte())
    }

    /// Status of the most recent transaction on the underlying port.
    pub fn bus_status(&self) -> BusStatus {
        self.bus.last_status()
    }
}
