//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: Compute the preferred size given constraints
//! 2. **Layout**: Accept the frame chosen by the host and derive geometry
//! 3. **Paint**: Emit draw calls against a [`Canvas`]
//!
//! Painting happens in widget-local coordinates: `(0, 0)` is the top-left
//! corner of the frame passed to [`Widget::layout`]. Hosts translate the
//! canvas before calling [`Widget::paint`].
//!
//! # Examples
//!
//! ```
//! use signal_level_core::{Canvas, Color, RecordingCanvas, Rect};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.fill_round_rect(Rect::new(0.0, 0.0, 10.0, 20.0), 4.0, 4.0, Color::WHITE);
//! assert_eq!(canvas.command_count(), 1);
//! ```

use crate::constraints::Constraints;
use crate::geometry::{Rect, Size};
use crate::Color;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Compute the preferred size under the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the frame assigned by the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the frame last assigned by [`Widget::layout`].
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rectangle with elliptical corners.
    fn fill_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, color: Color);
}
