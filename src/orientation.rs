//! Orientation to scan-direction mapping
//!
//! The HX8379 cannot rotate its frame, it can only flip the scan direction on
//! either axis through the set-address-mode command. Each [`Orientation`] maps
//! to one flip combination:
//!
//! | Orientation  | Flags  |
//! |--------------|--------|
//! | `Normal`     | `0b10` |
//! | `Rotated90`  | `0b01` |
//! | `Rotated180` | `0b00` |
//! | `Rotated270` | `0b11` |
//!
//! `Normal` carries a horizontal flip because the module is mounted mirrored.
//!
//! ## Example
//!
//! ```
//! use hx8379::{orientation::address_mode, Orientation};
//!
//! assert_eq!(address_mode(Orientation::Rotated270), [0x36, 0b11]);
//! assert_eq!(Orientation::from_degrees(180), Some(Orientation::Rotated180));
//! assert_eq!(Orientation::from_degrees(45), None);
//! ```

use crate::command::{FLIP_HORIZONTAL, FLIP_VERTICAL, SET_ADDRESS_MODE};
use crate::config::Orientation;

/// Flip flags for an orientation
pub const fn flip_flags(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Normal => FLIP_HORIZONTAL,
        Orientation::Rotated90 => FLIP_VERTICAL,
        Orientation::Rotated180 => 0,
        Orientation::Rotated270 => FLIP_HORIZONTAL | FLIP_VERTICAL,
    }
}

/// Set-address-mode command block for an orientation
pub const fn address_mode(orientation: Orientation) -> [u8; 2] {
    [SET_ADDRESS_MODE, flip_flags(orientation)]
}

impl Orientation {
    /// Orientation for a rotation in degrees, if it is one of 0, 90, 180, 270
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Normal),
            90 => Some(Self::Rotated90),
            180 => Some(Self::Rotated180),
            270 => Some(Self::Rotated270),
            _ => None,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Normal => 0,
            Self::Rotated90 => 90,
            Self::Rotated180 => 180,
            Self::Rotated270 => 270,
        }
    }
}
