use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;
use serde::{Serialize, Serializer};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// HexColor – an sRGB colour that serializes as `#RRGGBB`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Srgb<u8>);

impl HexColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        HexColor(Srgb::new(red, green, blue))
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.0.red, self.0.green, self.0.blue)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            self.0.red, self.0.green, self.0.blue
        )
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    /// Accepts `#RRGGBB`, `RRGGBB` or the short `#RGB` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(HexColor)
            .map_err(|_| ConfigError::BadColor(s.to_string()))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Plot background shared by both charts.
pub const PLOT_BACKGROUND: HexColor = HexColor::rgb(0x68, 0x6C, 0x6A);

// ---------------------------------------------------------------------------
// TrackPalette – fixed categorical colours, cycled
// ---------------------------------------------------------------------------

/// Seven shades of green, lightest first.
const DEFAULT_COLORS: [HexColor; 7] = [
    HexColor::rgb(0xAB, 0xEB, 0xC6),
    HexColor::rgb(0x82, 0xE0, 0xAA),
    HexColor::rgb(0x58, 0xD6, 0x8D),
    HexColor::rgb(0x2E, 0xCC, 0x71),
    HexColor::rgb(0x28, 0xB4, 0x63),
    HexColor::rgb(0x23, 0x9B, 0x56),
    HexColor::rgb(0x1D, 0x83, 0x48),
];

/// Discrete colour sequence assigned to categories in order of appearance.
/// Wraps around when there are more categories than colours.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPalette {
    colors: Vec<HexColor>,
}

impl Default for TrackPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl TrackPalette {
    pub fn new(colors: Vec<HexColor>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a comma-separated list of hex codes.
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        let colors = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(HexColor::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Colour for the `index`-th category.
    pub fn color_at(&self, index: usize) -> HexColor {
        self.colors[index % self.colors.len()]
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
