//! Coloring rule.
//!
//! The signal level picks a tier, and within a tier each bar gets one of two
//! colors depending on where its position ratio falls. This is a two-tone
//! scheme per tier, not an "N of M bars lit" meter.

use crate::palette::LevelColor;

/// Signal level at or above which every bar is drawn in the high color.
pub const HIGH_THRESHOLD: f32 = 0.80;
/// Lower bound of the medium tier (inclusive).
pub const MEDIUM_THRESHOLD: f32 = 0.50;
/// Upper bound of the medium tier (inclusive). Levels in `(0.79, 0.80)` fall
/// through to the low tier.
pub const MEDIUM_CEILING: f32 = 0.79;
/// Bars with a ratio below this are lit in the medium tier.
pub const MEDIUM_RATIO_CUTOFF: f32 = 0.50;
/// Bars with a ratio below this are lit in the low tier.
pub const LOW_RATIO_CUTOFF: f32 = 0.20;

/// Signal level range with its own coloring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalTier {
    /// `level >= 0.80`
    High,
    /// `0.50 <= level <= 0.79`
    Medium,
    /// Everything else
    Low,
}

impl SignalTier {
    /// Classify a signal level.
    #[must_use]
    pub fn from_level(level: f32) -> Self {
        if level >= HIGH_THRESHOLD {
            Self::High
        } else if (MEDIUM_THRESHOLD..=MEDIUM_CEILING).contains(&level) {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Pick the fill role for a bar at `ratio` (index / count) under `level`.
#[must_use]
pub fn bar_color(level: f32, ratio: f32) -> LevelColor {
    match SignalTier::from_level(level) {
        SignalTier::High => LevelColor::High,
        SignalTier::Medium if ratio < MEDIUM_RATIO_CUTOFF => LevelColor::Medium,
        SignalTier::Low if ratio < LOW_RATIO_CUTOFF && level != 0.0 => LevelColor::Low,
        SignalTier::Medium | SignalTier::Low => LevelColor::Empty,
    }
}
