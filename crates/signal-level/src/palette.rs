//! The four named fill colors and their defaults.

use serde::{Deserialize, Serialize};
use signal_level_core::Color;

/// Which of the four palette entries a bar is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelColor {
    /// Strong signal
    High,
    /// Medium signal
    Medium,
    /// Weak signal
    Low,
    /// Unlit bar
    Empty,
}

impl LevelColor {
    /// Built-in color for this role.
    #[must_use]
    pub fn default_color(self) -> Color {
        match self {
            Self::High => Color::rgb8(0x30, 0xD1, 0x58),
            Self::Medium => Color::rgb8(0xFF, 0xD6, 0x0A),
            Self::Low => Color::rgb8(0xFF, 0x45, 0x3A),
            Self::Empty => Color::rgb8(0x91, 0x95, 0x9B),
        }
    }
}

/// Fill colors used by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelPalette {
    /// Fill for signal levels of 0.80 and above
    #[serde(rename = "high_level_color")]
    pub high: Color,
    /// Fill for the medium tier
    #[serde(rename = "medium_level_color")]
    pub medium: Color,
    /// Fill for the low tier
    #[serde(rename = "low_level_color")]
    pub low: Color,
    /// Fill for unlit bars
    #[serde(rename = "empty_level_color")]
    pub empty: Color,
}

impl LevelPalette {
    /// Look up the color for a role.
    #[must_use]
    pub fn color(&self, role: LevelColor) -> Color {
        match role {
            LevelColor::High => self.high,
            LevelColor::Medium => self.medium,
            LevelColor::Low => self.low,
            LevelColor::Empty => self.empty,
        }
    }

    /// Set the high tier color.
    #[must_use]
    pub fn high(mut self, color: Color) -> Self {
        self.high = color;
        self
    }

    /// Set the medium tier color.
    #[must_use]
    pub fn medium(mut self, color: Color) -> Self {
        self.medium = color;
        self
    }

    /// Set the low tier color.
    #[must_use]
    pub fn low(mut self, color: Color) -> Self {
        self.low = color;
        self
    }

    /// Set the empty color.
    #[must_use]
    pub fn empty(mut self, color: Color) -> Self {
        self.empty = color;
        self
    }
}

impl Default for LevelPalette {
    fn default() -> Self {
        Self {
            high: LevelColor::High.default_color(),
            medium: LevelColor::Medium.default_color(),
            low: LevelColor::Low.default_color(),
            empty: LevelColor::Empty.default_color(),
        }
    }
}
