//! Indicator configuration.
//!
//! [`IndicatorConfig`] is a plain struct populated by the host before the
//! indicator is built. It can be written in code with the builder methods or
//! loaded from a YAML document:
//!
//! ```yaml
//! signal_level: 0.65
//! signal_bars_count: 5
//! signal_bars_gap: 8
//! signal_bar_corners: 12.0
//! high_level_color: "#30D158"
//! ```
//!
//! Two default bar gaps exist. [`IndicatorConfig::default`] uses
//! [`DEFAULT_BAR_GAP`] (20), while documents that omit `signal_bars_gap` fall
//! back to [`ATTRIBUTE_BAR_GAP`] (5).

use crate::error::{IndicatorError, Result};
use crate::palette::LevelPalette;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default signal level.
pub const DEFAULT_SIGNAL_LEVEL: f32 = 0.0;
/// Default corner radius of each bar, in drawing units.
pub const DEFAULT_CORNER_RADIUS: f32 = 120.0;
/// Default number of bars.
pub const DEFAULT_BAR_COUNT: u32 = 4;
/// Bar gap used by [`IndicatorConfig::default`].
pub const DEFAULT_BAR_GAP: f32 = 20.0;
/// Bar gap used when a configuration document omits `signal_bars_gap`.
pub const ATTRIBUTE_BAR_GAP: f32 = 5.0;

/// Keys accepted in a configuration document.
const DOCUMENT_KEYS: &[&str] = &[
    "signal_level",
    "signal_bars_count",
    "signal_bars_gap",
    "signal_bar_corners",
    "high_level_color",
    "medium_level_color",
    "low_level_color",
    "empty_level_color",
];

/// Host-supplied indicator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default = "IndicatorConfig::attribute_defaults")]
pub struct IndicatorConfig {
    /// Signal level in `[0, 1]`
    pub signal_level: f32,
    /// Number of bars, at least 1
    #[serde(rename = "signal_bars_count")]
    pub bar_count: u32,
    /// Horizontal spacing between bars
    #[serde(rename = "signal_bars_gap")]
    pub bar_gap: f32,
    /// Corner radius applied on both axes of every bar
    #[serde(rename = "signal_bar_corners")]
    pub bar_corner_radius: f32,
    /// Fill colors
    #[serde(flatten)]
    pub colors: LevelPalette,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            signal_level: DEFAULT_SIGNAL_LEVEL,
            bar_count: DEFAULT_BAR_COUNT,
            bar_gap: DEFAULT_BAR_GAP,
            bar_corner_radius: DEFAULT_CORNER_RADIUS,
            colors: LevelPalette::default(),
        }
    }
}

impl IndicatorConfig {
    /// Create a configuration with the programmatic defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults applied to keys missing from a configuration document.
    ///
    /// Identical to [`IndicatorConfig::default`] except for the bar gap.
    #[must_use]
    pub fn attribute_defaults() -> Self {
        Self {
            bar_gap: ATTRIBUTE_BAR_GAP,
            ..Self::default()
        }
    }

    /// Parse and validate a YAML document.
    ///
    /// An empty document yields [`IndicatorConfig::attribute_defaults`].
    /// Unknown keys are rejected so a misspelled option is not silently
    /// replaced by its default.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::attribute_defaults());
        }
        let document: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml)?;
        if document.is_null() {
            return Ok(Self::attribute_defaults());
        }
        if let Some(mapping) = document.as_mapping() {
            for key in mapping.keys() {
                match key.as_str() {
                    Some(name) if DOCUMENT_KEYS.contains(&name) => {}
                    _ => {
                        return Err(IndicatorError::InvalidConfiguration(format!(
                            "unknown key {key:?}"
                        )))
                    }
                }
            }
        }
        let config: Self = serde_yaml_ng::from_value(document)?;
        config.validated()
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set the signal level.
    #[must_use]
    pub fn with_signal_level(mut self, level: f32) -> Self {
        self.signal_level = level;
        self
    }

    /// Set the number of bars.
    #[must_use]
    pub fn with_bar_count(mut self, count: u32) -> Self {
        self.bar_count = count;
        self
    }

    /// Set the gap between bars.
    #[must_use]
    pub fn with_bar_gap(mut self, gap: f32) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Set the bar corner radius.
    #[must_use]
    pub fn with_bar_corner_radius(mut self, radius: f32) -> Self {
        self.bar_corner_radius = radius;
        self
    }

    /// Set the fill colors.
    #[must_use]
    pub fn with_colors(mut self, colors: LevelPalette) -> Self {
        self.colors = colors;
        self
    }

    /// Normalize every field and reject what cannot be normalized.
    ///
    /// The signal level is clamped to `[0, 1]` (NaN becomes 0), and negative
    /// or non-finite gaps and radii become 0. A zero bar count is an error.
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            signal_level: normalize_level(self.signal_level),
            bar_count: check_bar_count(self.bar_count)?,
            bar_gap: normalize_non_negative("bar gap", self.bar_gap),
            bar_corner_radius: normalize_non_negative("bar corner radius", self.bar_corner_radius),
            colors: self.colors,
        })
    }
}

pub(crate) fn check_bar_count(count: u32) -> Result<u32> {
    if count == 0 {
        return Err(IndicatorError::InvalidConfiguration(
            "bar count must be at least 1".to_string(),
        ));
    }
    Ok(count)
}

pub(crate) fn normalize_level(level: f32) -> f32 {
    if level.is_nan() {
        warn!("signal level is NaN; using 0.0");
        return 0.0;
    }
    let clamped = level.clamp(0.0, 1.0);
    if clamped != level {
        warn!(level, clamped, "signal level out of range; clamped");
    }
    clamped
}

pub(crate) fn normalize_non_negative(name: &'static str, value: f32) -> f32 {
    if !value.is_finite() || value < 0.0 {
        warn!(value, "{name} must be finite and non-negative; using 0.0");
        return 0.0;
    }
    value
}
