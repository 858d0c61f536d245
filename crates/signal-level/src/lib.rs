//! Signal-strength indicator widget.
//!
//! [`SignalIndicator`] draws a row of rounded bars whose fill depends on a
//! signal level in `[0, 1]`:
//!
//! - level `>= 0.80`: every bar uses the high color
//! - level in `[0.50, 0.79]`: bars with ratio `< 0.50` use the medium color
//! - otherwise: bars with ratio `< 0.20` use the low color unless the level is 0
//!
//! Bars that are not lit use the empty color. A bar's ratio is its 1-based
//! index divided by the bar count.
//!
//! The widget never calls back into its host. Every mutation returns an
//! [`Invalidation`] describing whether the host should re-measure, repaint,
//! or both.

mod config;
mod error;
mod indicator;
pub mod layout;
mod palette;
pub mod tier;

pub use config::{
    IndicatorConfig, ATTRIBUTE_BAR_GAP, DEFAULT_BAR_COUNT, DEFAULT_BAR_GAP, DEFAULT_CORNER_RADIUS,
    DEFAULT_SIGNAL_LEVEL,
};
pub use error::{IndicatorError, Result};
pub use indicator::{Invalidation, LayoutState, SignalIndicator};
pub use layout::Bar;
pub use palette::{LevelColor, LevelPalette};
pub use tier::{bar_color, SignalTier};

pub use signal_level_core::{
    Canvas, Color, Constraints, DisplayMetrics, DrawCommand, MeasureSpec, Padding, Rect,
    RecordingCanvas, Size, Widget,
};
