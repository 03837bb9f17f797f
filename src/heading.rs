//! Compass headings for the rotator mast.
//!
//! The eight cardinal variants map 1:1 onto the rotary selector positions
//! (1..=8 in selector priority order).  `Unknown` means "no position
//! asserted" — after power-up, or while the selector knob sits between
//! detents.  Human-readable labels belong to the UI layer; the `Display`
//! impl here is the terse form used in log lines only.

use serde::{Deserialize, Serialize};

/// A discrete mast heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    Unknown = 0,
    South = 1,
    SouthWest = 2,
    West = 3,
    NorthWest = 4,
    North = 5,
    NorthEast = 6,
    East = 7,
    SouthEast = 8,
}

impl Heading {
    /// Number of selectable positions (excludes `Unknown`).
    pub const POSITIONS: usize = 8;

    /// Selector position (1..=8) for cardinal headings, `None` for `Unknown`.
    pub const fn position(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            _ => Some(self as u8),
        }
    }

    /// Heading selected at position `pos` (1..=8); anything else is `Unknown`.
    pub const fn from_position(pos: u8) -> Self {
        match pos {
            1 => Self::South,
            2 => Self::SouthWest,
            3 => Self::West,
            4 => Self::NorthWest,
            5 => Self::North,
            6 => Self::NorthEast,
            7 => Self::East,
            8 => Self::SouthEast,
            _ => Self::Unknown,
        }
    }

    /// Expander output bit that energises this heading's relay.
    ///
    /// The relay loom on the driver board does not follow selector order —
    /// this table matches the as-built wiring, verified against the board.
    pub const fn relay_bit(self) -> Option<u8> {
        match self {
            Self::South => Some(4),
            Self::SouthWest => Some(3),
            Self::West => Some(2),
            Self::NorthWest => Some(5),
            Self::North => Some(0),
            Self::NorthEast => Some(1),
            Self::East => Some(6),
            Self::SouthEast => Some(7),
            Self::Unknown => None,
        }
    }

    /// Output-port byte with exactly this heading's relay energised
    /// (`0x00` for `Unknown` — all relays released).
    pub const fn relay_mask(self) -> u8 {
        match self.relay_bit() {
            Some(bit) => 1 << bit,
            None => 0x00,
        }
    }

    /// True for any cardinal heading, false for `Unknown`.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl core::fmt::Display for Heading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Unknown => "?",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
        };
        f.write_str(s)
    }
}
