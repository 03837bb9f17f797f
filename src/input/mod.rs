//! Input classification — debounced button and rotary position selector.
//!
//! Both components are pure logic: they consume raw line levels sampled
//! through [`InputPort`](crate::app::ports::InputPort) and never touch
//! hardware themselves.

pub mod debounce;
pub mod rotary;

pub use debounce::DebouncedInput;
pub use rotary::RotarySelector;

/// One cycle's worth of raw digital input levels.
///
/// Levels are electrical, not logical: `true` means the line reads high.
/// Polarity (the button is active-low) is resolved by the classifiers.
#[derive(Debug, Clone, Copy)]
pub struct InputSnapshot {
    /// Raw push-button line level.
    pub button_level: bool,
    /// Raw rotary selector line levels, in selector priority order
    /// (index 0 = position 1).
    pub rotary_levels: [bool; 8],
}

impl InputSnapshot {
    /// Snapshot with every line at rest: button high (pulled up, not
    /// pressed), no rotary line asserted.
    pub const fn idle() -> Self {
        Self {
            button_level: true,
            rotary_levels: [false; 8],
        }
    }
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}
