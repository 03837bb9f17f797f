//! System configuration parameters
//!
//! All tunable parameters for the rotator controller.  Budgets and windows
//! live here rather than as embedded constants so bench setups can slow the
//! bus down or tighten the debounce without touching driver code.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Input classification ---
    /// Debounce window for the push-button (milliseconds).
    pub debounce_window_ms: u32,
    /// The button line is pulled up and reads low while pressed.
    pub button_active_low: bool,

    // --- Control loop ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,

    // --- I2C bus ---
    /// Wall-clock retry budget per bus operation (milliseconds).
    pub bus_budget_ms: u64,
    /// Optional hard cap on attempts per bus operation.
    pub bus_max_attempts: Option<u32>,
    /// 7-bit address of the relay-bank port expander (A0/A1 strapped low).
    pub expander_address: u8,
    /// Retry budget for the start-up presence probe (milliseconds) —
    /// generous, the expander may still be coming out of power-on reset.
    pub expander_probe_budget_ms: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Input classification
            debounce_window_ms: 10,
            button_active_low: true,

            // Control loop
            control_loop_interval_ms: 50, // 20 Hz

            // I2C bus
            bus_budget_ms: 1_000,
            bus_max_attempts: None,
            expander_address: 0x74,
            expander_probe_budget_ms: 5_000,
        }
    }
}
