//! Geometric primitives: `Size`, `Rect`, `Padding`.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from left/top/right/bottom edges.
    ///
    /// Edges are taken as-is; a `right` smaller than `left` yields a negative width.
    #[must_use]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Insets between a widget's outer edge and its content area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Left inset
    pub left: f32,
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create padding from individual insets.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side.
    #[must_use]
    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of left and right insets.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom insets.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size left over for content once the insets are removed.
    ///
    /// May be negative when the insets exceed the outer size.
    #[must_use]
    pub fn content_size(&self, outer: Size) -> Size {
        Size::new(
            outer.width - self.horizontal(),
            outer.height - self.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_from_ltrb() {
        let r = Rect::from_ltrb(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_from_ltrb_inverted_keeps_sign() {
        let r = Rect::from_ltrb(20.0, 0.0, 10.0, 5.0);
        assert_eq!(r.width, -10.0);
    }

    #[test]
    fn test_rect_from_size() {
        let r = Rect::from_size(Size::new(30.0, 40.0));
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_padding_totals() {
        let p = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.horizontal(), 4.0);
        assert_eq!(p.vertical(), 6.0);
        assert_eq!(Padding::uniform(5.0).horizontal(), 10.0);
        assert_eq!(Padding::default(), Padding::ZERO);
    }

    #[test]
    fn test_padding_content_size() {
        let p = Padding::new(10.0, 5.0, 10.0, 5.0);
        assert_eq!(p.content_size(Size::new(100.0, 50.0)), Size::new(80.0, 40.0));
        assert_eq!(p.content_size(Size::new(10.0, 5.0)), Size::new(-10.0, -5.0));
    }

    proptest! {
        #[test]
        fn prop_ltrb_roundtrip(l in -500.0f32..500.0, t in -500.0f32..500.0, w in 0.0f32..500.0, h in 0.0f32..500.0) {
            let r = Rect::from_ltrb(l, t, l + w, t + h);
            prop_assert!((r.right() - (l + w)).abs() < 1e-3);
            prop_assert!((r.bottom() - (t + h)).abs() < 1e-3);
        }
    }
}
