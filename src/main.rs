//! Rotator Controller Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter          LogEventSink      Esp32TimeAdapter │
//! │  (Input+Actuator)         (EventSink)       (Clock)          │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)                 │      │
//! │  │  Debounce · RotarySelector · DirectionController   │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  RelayBank ── Tca9539 ── BoundedBusPort ── I2cDriver         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! One loop iteration is one control cycle: input sampling, debounce
//! classification, direction reconciliation (including any bus I/O),
//! notification, then a FreeRTOS delay until the next cycle.  A stalled
//! bus blocks the whole cycle for up to its retry budget, which is why the
//! budget lives in `SystemConfig` rather than in the driver.

#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;

use rotorctl::adapters::hardware::HardwareAdapter;
use rotorctl::adapters::log_sink::LogEventSink;
use rotorctl::adapters::time::Esp32TimeAdapter;
use rotorctl::app::ports::Clock;
use rotorctl::app::service::AppService;
use rotorctl::bus::{BoundedBusPort, BusConfig, Tca9539};
use rotorctl::config::SystemConfig;
use rotorctl::drivers::hw_init;
use rotorctl::drivers::indicator::IndicatorLed;
use rotorctl::drivers::relays::RelayBank;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("rotorctl v{} starting", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. One-shot peripheral init ───────────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // GPIO config failure is critical — log and halt; the watchdog
        // resets us after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. I2C bus + relay bank ───────────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c_cfg = I2cConfig::new().baudrate(100u32.kHz().into());
    // gpio21/gpio47: see pins::I2C_SDA_GPIO / pins::I2C_SCL_GPIO — the HAL
    // wants the typed pin singletons, not numbers.
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio47,
        &i2c_cfg,
    )?;

    let bus = BoundedBusPort::new(i2c, Esp32TimeAdapter::new(), BusConfig::from(&config));
    let expander = Tca9539::new(bus, config.expander_address);
    let mut hw = HardwareAdapter::new(RelayBank::new(expander), IndicatorLed::new());

    if let Err(e) = hw.relays_mut().init(config.expander_probe_budget_ms) {
        // Not fatal: the first reconciliation retries the same registers.
        warn!("relay bank init failed ({e}); actuation will retry from the control loop");
    }

    // ── 4. Application service + control loop ─────────────────
    let clock = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();
    let mut service = AppService::new(&config);
    service.start(&mut sink);

    let tick_ms = config.control_loop_interval_ms;
    loop {
        service.tick(clock.now_ms(), &mut hw, &mut sink);
        FreeRtos::delay_ms(tick_ms);
    }
}
