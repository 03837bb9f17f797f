//! GPIO / peripheral pin assignments for the rotator control board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button toggling the indicator.
pub const BUTTON_GPIO: i32 = 0;

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// Digital output: cosmetic indicator LED (active HIGH).
pub const INDICATOR_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Rotary selector (8 mutually-exclusive lines, active HIGH)
// ---------------------------------------------------------------------------

/// Selector lines in priority order, position 1 (South) first.
pub const ROTARY_GPIOS: [i32; 8] = [8, 3, 46, 9, 10, 11, 12, 13];

// ---------------------------------------------------------------------------
// I²C bus (relay-bank port expander)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 47;
