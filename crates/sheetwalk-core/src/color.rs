//! Background color representation

use std::fmt;

use crate::error::{Error, Result};

/// Packed-integer sentinel meaning "no explicit color"
///
/// Hosts report and accept this value where they would otherwise use a
/// packed RGB integer. In the typed API it is `None`.
pub const DEFAULT_COLOR: i64 = -1;

/// An explicit RGB background color, packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u32", try_from = "u32"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Largest packed value a color can hold
    pub const MAX_PACKED: u32 = 0xFF_FF_FF;

    /// Create a color from its components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` integer
    pub fn from_packed(packed: u32) -> Result<Self> {
        if packed > Self::MAX_PACKED {
            return Err(Error::invalid(format!(
                "packed color {packed:#X} exceeds {:#X}",
                Self::MAX_PACKED
            )));
        }
        Ok(Color {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    /// Interpret a host-style packed integer, where [`DEFAULT_COLOR`] means
    /// "no explicit color".
    pub fn from_host_int(value: i64) -> Result<Option<Self>> {
        if value == DEFAULT_COLOR {
            return Ok(None);
        }
        match u32::try_from(value) {
            Ok(packed) => Color::from_packed(packed).map(Some),
            Err(_) => Err(Error::invalid(format!(
                "color must be {DEFAULT_COLOR} or within 0..={:#X}, got {value}",
                Self::MAX_PACKED
            ))),
        }
    }

    /// Convert an optional color to the host-style packed integer
    pub fn to_host_int(color: Option<Color>) -> i64 {
        color.map_or(DEFAULT_COLOR, |c| i64::from(c.packed()))
    }

    /// RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packed `0xRRGGBB` value
    pub fn packed(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::from_rgb(r, g, b)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.packed()
    }
}

impl TryFrom<u32> for Color {
    type Error = Error;

    fn try_from(packed: u32) -> Result<Self> {
        Color::from_packed(packed)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rgb_and_packed_agree() {
        let c = Color::from_rgb(255, 0, 128);
        assert_eq!(c.rgb(), (255, 0, 128));
        assert_eq!(c.packed(), 16711808);
        assert_eq!(Color::from_packed(16711808).unwrap(), c);
        assert_eq!(Color::from((255, 0, 128)), c);
    }

    #[test]
    fn test_host_int_sentinel() {
        assert_eq!(Color::from_host_int(DEFAULT_COLOR).unwrap(), None);
        assert_eq!(
            Color::from_host_int(0xFF0000).unwrap(),
            Some(Color::RED)
        );
        assert_eq!(Color::to_host_int(None), -1);
        assert_eq!(Color::to_host_int(Some(Color::BLUE)), 255);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Color::from_packed(0x1_00_00_00).unwrap_err().is_invalid_argument());
        assert!(Color::from_host_int(-2).unwrap_err().is_invalid_argument());
        assert!(Color::from_host_int(1 << 40).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_rgb(255, 0, 128).to_string(), "#FF0080");
    }

    proptest! {
        #[test]
        fn prop_packed_roundtrip(packed in 0u32..=Color::MAX_PACKED) {
            prop_assert_eq!(Color::from_packed(packed).unwrap().packed(), packed);
        }
    }
}
