//! Debounced digital input classifier.
//!
//! Converts a noisy line into idle / press-edge / held / release-edge using
//! a single ordered counter.  The encoding is part of this module's
//! contract — callers compare against the named constants, never literals:
//!
//! | counter value            | meaning                                    |
//! |--------------------------|--------------------------------------------|
//! | `0`                      | idle (debounced inactive)                  |
//! | [`PRESS_EDGE`] (`1`)     | press edge — reported for exactly one poll |
//! | [`HELD_FLOOR`]..=[`HELD_CEIL`] | held; cycle count since the press    |
//! | [`RELEASE_EDGE`] (`0xFFFF`) | release edge — exactly one poll, then 0 |
//!
//! While held, the counter increments once per poll and wraps from
//! [`HELD_CEIL`] back to [`HELD_FLOOR`] — never to [`PRESS_EDGE`], so a
//! press is never re-signalled during a long hold.  Packing edges and
//! duration into one counter keeps the per-cycle state to a single `u16`,
//! at the cost of the two reserved sentinels.

/// Counter value on the poll where the press is first recognised.
pub const PRESS_EDGE: u16 = 1;
/// Lowest counter value of the held range, and the wrap target.
pub const HELD_FLOOR: u16 = 2;
/// Highest counter value of the held range; the next active poll wraps
/// the counter to [`HELD_FLOOR`].
pub const HELD_CEIL: u16 = 0xFFFE;
/// Counter value on the poll where the release is first recognised.
pub const RELEASE_EDGE: u16 = u16::MAX;

/// Debounced, edge- and hold-aware classifier for one digital line.
///
/// Owned exclusively by whichever component polls the line; call
/// [`poll`](Self::poll) exactly once per control cycle.
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    /// Debounce window in milliseconds.
    window_ms: u32,
    /// True when the line reads electrically low while active (pulled up).
    active_low: bool,
    /// Raw level seen on the previous poll.
    last_raw: bool,
    /// Timestamp of the last raw level change.
    last_change_ms: u64,
    /// Classified state counter (see module docs).
    state: u16,
}

impl DebouncedInput {
    /// Classifier for a line that idles at the opposite of its active level.
    pub fn new(window_ms: u32, active_low: bool) -> Self {
        Self {
            window_ms,
            active_low,
            // Idle raw level: high for an active-low line, low otherwise.
            last_raw: active_low,
            last_change_ms: 0,
            state: 0,
        }
    }

    /// Feed one raw sample taken at monotonic time `now_ms`.
    ///
    /// A raw level change restarts the debounce timer; the classified
    /// counter only advances once the level has been stable for longer
    /// than the window.  The edge sentinels are the exception: they expire
    /// after exactly one poll even if the line is already bouncing again,
    /// so a caller can never observe the same edge twice.
    pub fn poll(&mut self, raw: bool, now_ms: u64) {
        if raw != self.last_raw {
            self.last_change_ms = now_ms;
        }
        let stable = now_ms.wrapping_sub(self.last_change_ms) > u64::from(self.window_ms);
        let active = raw != self.active_low;

        self.state = match self.state {
            RELEASE_EDGE => 0,
            0 => {
                if stable && active {
                    PRESS_EDGE
                } else {
                    0
                }
            }
            held => {
                if stable {
                    if active {
                        if held < HELD_CEIL {
                            held + 1
                        } else {
                            HELD_FLOOR
                        }
                    } else {
                        RELEASE_EDGE
                    }
                } else if held == PRESS_EDGE {
                    HELD_FLOOR
                } else {
                    // Mid-bounce: the hold count freezes until the line
                    // settles again.
                    held
                }
            }
        };

        self.last_raw = raw;
    }

    /// True for exactly one poll per debounced press.
    pub fn is_press_edge(&self) -> bool {
        self.state == PRESS_EDGE
    }

    /// True for exactly one poll per debounced release.
    pub fn is_release_edge(&self) -> bool {
        self.state == RELEASE_EDGE
    }

    /// True once the input has been held for more than `min_cycles` polls
    /// past the press edge.
    pub fn is_held(&self, min_cycles: u16) -> bool {
        self.state > PRESS_EDGE.saturating_add(min_cycles) && self.state < RELEASE_EDGE
    }

    /// Raw classified counter, for diagnostics.
    pub fn state(&self) -> u16 {
        self.state
    }
}
