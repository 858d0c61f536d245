//! Draw commands.
//!
//! All rendering reduces to these primitives.

use crate::{Color, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle.
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Filled rectangle with elliptical corners.
    RoundRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Horizontal corner radius
        radius_x: f32,
        /// Vertical corner radius
        radius_y: f32,
        /// Fill color
        color: Color,
    },
}

impl DrawCommand {
    /// Create a filled rectangle command.
    #[must_use]
    pub fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect { bounds, color }
    }

    /// Create a rounded rectangle command with the same radius on both axes.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::RoundRect {
            bounds,
            radius_x: radius,
            radius_y: radius,
            color,
        }
    }

    /// Bounds of the command.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::RoundRect { bounds, .. } => *bounds,
        }
    }

    /// Fill color of the command.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. } | Self::RoundRect { color, .. } => *color,
        }
    }
}
