//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the relay bank and the indicator LED, exposing them through
//! [`InputPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual GPIO.  On non-espidf targets the input side
//! reports idle lines so the library compiles and links for host tests
//! (which use mock adapters instead).

use embedded_hal::i2c::I2c;

use crate::app::ports::{ActuatorPort, Clock, InputPort};
use crate::bus::BusTimeout;
use crate::drivers::indicator::IndicatorLed;
use crate::drivers::relays::RelayBank;
use crate::heading::Heading;
use crate::input::InputSnapshot;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C, C> {
    relays: RelayBank<I2C, C>,
    indicator: IndicatorLed,
}

impl<I2C, C> HardwareAdapter<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    pub fn new(relays: RelayBank<I2C, C>, indicator: IndicatorLed) -> Self {
        Self { relays, indicator }
    }

    /// The relay bank, for start-up initialisation and diagnostics.
    pub fn relays_mut(&mut self) -> &mut RelayBank<I2C, C> {
        &mut self.relays
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I2C, C> InputPort for HardwareAdapter<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    #[cfg(target_os = "espidf")]
    fn read_inputs(&mut self) -> InputSnapshot {
        use crate::drivers::hw_init::gpio_read;
        use crate::pins;

        let mut rotary_levels = [false; 8];
        for (level, &pin) in rotary_levels.iter_mut().zip(pins::ROTARY_GPIOS.iter()) {
            *level = gpio_read(pin);
        }
        InputSnapshot {
            button_level: gpio_read(pins::BUTTON_GPIO),
            rotary_levels,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_inputs(&mut self) -> InputSnapshot {
        InputSnapshot::idle()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I2C, C> ActuatorPort for HardwareAdapter<I2C, C>
where
    I2C: I2c,
    C: Clock,
{
    fn drive_heading(&mut self, heading: Heading) -> Result<(), BusTimeout> {
        self.relays.drive(heading)
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }
}
