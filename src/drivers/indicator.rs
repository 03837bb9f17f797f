//! Cosmetic indicator LED driver.
//!
//! On ESP-IDF: drives the indicator GPIO directly.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLed {
    on: bool,
}

impl IndicatorLed {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::INDICATOR_GPIO, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for IndicatorLed {
    fn default() -> Self {
        Self::new()
    }
}
