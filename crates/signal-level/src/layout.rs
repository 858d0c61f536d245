//! Bar geometry.
//!
//! [`draw_area`] derives the centered field the bars live in; [`bar_slots`]
//! walks that field left to right producing one rectangle per bar.

use crate::palette::LevelColor;
use signal_level_core::{Color, Padding, Rect, Size};
use std::num::NonZeroU32;

/// Nominal width of one bar in density-independent units, used when measuring.
pub const DESIRED_BAR_WIDTH_DP: f32 = 50.0;
/// Nominal content height in physical pixels, used when measuring.
pub const BASE_HEIGHT_PX: f32 = 400.0;

/// Compute the field that holds `bar_count` cells inside `size` minus `padding`.
///
/// Each cell is as wide as the content width divided by the count, but never
/// wider than the content height. The field spans the full content height and
/// is centered horizontally.
#[must_use]
pub fn draw_area(size: Size, padding: Padding, bar_count: NonZeroU32) -> Rect {
    let safe = padding.content_size(size);
    let count = bar_count.get() as f32;

    let cell = (safe.width / count).min(safe.height);
    let field_width = cell * count;
    let field_height = safe.height;

    Rect::new(
        padding.left + (safe.width - field_width) / 2.0,
        padding.top + (safe.height - field_height) / 2.0,
        field_width,
        field_height,
    )
}

/// Width from one bar's origin offset to its right edge.
#[must_use]
pub fn slot_width(bounds: Rect, bar_count: NonZeroU32, gap: f32) -> f32 {
    bounds.width / bar_count.get() as f32 - gap
}

/// Position of one bar before coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    /// 1-based index
    pub index: u32,
    /// `index / bar_count`, in `(0, 1]`
    pub ratio: f32,
    /// Bar rectangle
    pub rect: Rect,
}

/// Walk the bars of `bounds` from left to right.
///
/// Bar `i` spans `offset + gap ..= offset + slot` horizontally and
/// `h/2 - ratio * h/2 ..= h` vertically, where `h` is the field height and
/// `offset` starts at the field's left edge and advances by `slot + gap`.
/// The vertical extent is measured from the widget origin, not from the
/// field's top edge.
pub fn bar_slots(
    bounds: Rect,
    bar_count: NonZeroU32,
    gap: f32,
) -> impl Iterator<Item = BarSlot> + Clone {
    let count = bar_count.get();
    let slot = slot_width(bounds, bar_count, gap);
    let half = bounds.height / 2.0;

    (1..=count).scan(bounds.left(), move |offset, index| {
        let ratio = index as f32 / count as f32;
        let rect = Rect::from_ltrb(
            *offset + gap,
            half - ratio * half,
            *offset + slot,
            bounds.height,
        );
        *offset += slot + gap;
        Some(BarSlot { index, ratio, rect })
    })
}

/// A fully resolved bar: geometry plus fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// 1-based index
    pub index: u32,
    /// `index / bar_count`
    pub ratio: f32,
    /// Bar rectangle
    pub rect: Rect,
    /// Palette role chosen by the coloring rule
    pub role: LevelColor,
    /// Resolved fill color
    pub fill: Color,
}
