//! Relay bank driver — the mast actuator.
//!
//! Eight relays hang off port 0 of the TCA9539; energising one routes the
//! rotator motor supply for that heading.  The controller guarantees at
//! most one relay is commanded at a time (the written byte always has at
//! most one bit set), so there is no make-before-break hazard here.

use embedded_hal::i2c::I2c;
use log::info;

use crate::app::ports::Clock;
use crate::bus::{BusStatus, BusTimeout, PinMode, Port, Register, Tca9539};
use crate::heading::Heading;

pub struct RelayBank<I2C, C> {
    expander: Tca9539<I2C, C>,
}

impl<I2C, C> RelayBank<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    pub fn new(expander: Tca9539<I2C, C>) -> Self {
        Self { expander }
    }

    /// Probe the expander and bring the bank to a known state: every pin an
    /// output, every relay released.
    ///
    /// A failure here is not fatal — the control loop's first actuation
    /// will retry the same registers.
    pub fn init(&mut self, probe_budget_ms: u64) -> Result<(), BusTimeout> {
        self.expander.probe(probe_budget_ms)?;
        self.expander.set_port_mode(Port::Port0, PinMode::Output)?;
        self.expander.set_port_mode(Port::Port1, PinMode::Output)?;
        self.release_all()?;
        info!("relay bank initialised, all relays released");
        Ok(())
    }

    /// Energise exactly the relay for `heading`; `Unknown` releases all.
    pub fn drive(&mut self, heading: Heading) -> Result<(), BusTimeout> {
        self.expander
            .write_register(Register::Output0, heading.relay_mask())
    }

    /// Release every relay.
    pub fn release_all(&mut self) -> Result<(), BusTimeout> {
        self.expander.write_register(Register::Output0, 0x00)
    }

    /// Status of the most recent bus transaction.
    pub fn bus_status(&self) -> BusStatus {
        self.expander.bus_status()
    }
}
