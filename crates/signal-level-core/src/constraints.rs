//! Layout constraints for widgets.
//!
//! A host lays a widget out one axis at a time: each axis carries a
//! [`MeasureSpec`] describing how much room the parent offers, and the widget
//! reports its desired size which is then resolved against that spec.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// How the parent constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The parent has decided the size; the child must use it.
    Exact(f32),
    /// The child may be as large as it wants up to the given size.
    AtMost(f32),
    /// No constraint; the child picks its own size.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a desired size against this spec.
    #[must_use]
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified => desired,
        }
    }
}

/// Layout constraints handed to [`Widget::measure`](crate::Widget::measure).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Suggested minimum content width, excluding padding
    pub min_width: f32,
    /// Suggested minimum content height, excluding padding
    pub min_height: f32,
    /// Horizontal spec
    pub width: MeasureSpec,
    /// Vertical spec
    pub height: MeasureSpec,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(
        min_width: f32,
        min_height: f32,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Self {
        Self {
            min_width,
            min_height,
            width,
            height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(
            0.0,
            0.0,
            MeasureSpec::Exact(size.width),
            MeasureSpec::Exact(size.height),
        )
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(
            0.0,
            0.0,
            MeasureSpec::AtMost(size.width),
            MeasureSpec::AtMost(size.height),
        )
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, 0.0, MeasureSpec::Unspecified, MeasureSpec::Unspecified)
    }

    /// Create constraints with suggested minimum content sizes.
    #[must_use]
    pub fn with_min(mut self, min_width: f32, min_height: f32) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Resolve a desired size against both axes.
    #[must_use]
    pub fn resolve(&self, desired: Size) -> Size {
        Size::new(
            self.width.resolve(desired.width),
            self.height.resolve(desired.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Display density used to convert density-independent units to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent unit
    pub scale: f32,
}

impl DisplayMetrics {
    /// Create metrics for the given density scale.
    #[must_use]
    pub const fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Convert density-independent units to physical pixels.
    #[must_use]
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}
