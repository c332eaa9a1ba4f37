#![forbid(unsafe_code)]

//! ANSI-16 palette.
//!
//! The prompt and the effect tables speak in the classic 16-color terminal
//! palette; cells store the canonical RGB value for each index.

use crate::cell::PackedRgba;

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

/// Canonical RGB values for the 16 ANSI colors.
pub const ANSI16_PALETTE: [PackedRgba; 16] = [
    PackedRgba::rgb(0, 0, 0),       // Black
    PackedRgba::rgb(205, 0, 0),     // Red
    PackedRgba::rgb(0, 205, 0),     // Green
    PackedRgba::rgb(205, 205, 0),   // Yellow
    PackedRgba::rgb(0, 0, 238),     // Blue
    PackedRgba::rgb(205, 0, 205),   // Magenta
    PackedRgba::rgb(0, 205, 205),   // Cyan
    PackedRgba::rgb(229, 229, 229), // White
    PackedRgba::rgb(127, 127, 127), // Bright Black
    PackedRgba::rgb(255, 0, 0),     // Bright Red
    PackedRgba::rgb(0, 255, 0),     // Bright Green
    PackedRgba::rgb(255, 255, 0),   // Bright Yellow
    PackedRgba::rgb(92, 92, 255),   // Bright Blue
    PackedRgba::rgb(255, 0, 255),   // Bright Magenta
    PackedRgba::rgb(0, 255, 255),   // Bright Cyan
    PackedRgba::rgb(255, 255, 255), // Bright White
];

impl Ansi16 {
    /// Raw ANSI index (0-15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            8 => Some(Self::BrightBlack),
            9 => Some(Self::BrightRed),
            10 => Some(Self::BrightGreen),
            11 => Some(Self::BrightYellow),
            12 => Some(Self::BrightBlue),
            13 => Some(Self::BrightMagenta),
            14 => Some(Self::BrightCyan),
            15 => Some(Self::BrightWhite),
            _ => None,
        }
    }

    /// Canonical RGB value for this color.
    #[must_use]
    pub const fn rgb(self) -> PackedRgba {
        ANSI16_PALETTE[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_roundtrips_all_indices() {
        for i in 0..16u8 {
            assert_eq!(Ansi16::from_u8(i).unwrap().as_u8(), i);
        }
        assert_eq!(Ansi16::from_u8(16), None);
    }

    #[test]
    fn rgb_matches_the_palette_table() {
        assert_eq!(Ansi16::Black.rgb(), PackedRgba::rgb(0, 0, 0));
        assert_eq!(Ansi16::BrightWhite.rgb(), PackedRgba::rgb(255, 255, 255));
        assert_eq!(Ansi16::Red.rgb(), ANSI16_PALETTE[1]);
    }
}
