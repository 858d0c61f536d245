//! The signal-level indicator widget.

use crate::config::{check_bar_count, normalize_level, normalize_non_negative, IndicatorConfig};
use crate::error::Result;
use crate::layout::{bar_slots, draw_area, Bar, BASE_HEIGHT_PX, DESIRED_BAR_WIDTH_DP};
use crate::palette::LevelPalette;
use crate::tier::bar_color;
use signal_level_core::{
    Canvas, Constraints, DisplayMetrics, LayoutResult, Padding, Rect, Size, Widget,
};
use std::num::NonZeroU32;
use std::ops::{BitOr, BitOrAssign};
use tracing::{debug, trace};

/// Work a host has to schedule after a mutation.
///
/// Returned by every setter instead of calling back into the host, so the
/// host stays in charge of batching.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Invalidation {
    /// The preferred size may have changed; re-run measure.
    pub relayout: bool,
    /// The painted output changed; repaint.
    pub redraw: bool,
}

impl Invalidation {
    /// Nothing changed.
    pub const NONE: Self = Self {
        relayout: false,
        redraw: false,
    };
    /// Only the painted output changed.
    pub const REDRAW: Self = Self {
        relayout: false,
        redraw: true,
    };
    /// Size and painted output may both have changed.
    pub const RELAYOUT: Self = Self {
        relayout: true,
        redraw: true,
    };

    /// Check if there is nothing to do.
    #[must_use]
    pub fn is_none(&self) -> bool {
        !self.relayout && !self.redraw
    }
}

impl BitOr for Invalidation {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            relayout: self.relayout || rhs.relayout,
            redraw: self.redraw || rhs.redraw,
        }
    }
}

impl BitOrAssign for Invalidation {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Layout cache state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// Parameters changed since the host last assigned a size.
    Configured,
    /// The draw area matches the current size and parameters.
    LaidOut,
}

/// A row of rounded bars colored by a signal level.
///
/// # Examples
///
/// ```
/// use signal_level::{IndicatorConfig, RecordingCanvas, SignalIndicator, Size, Widget};
///
/// let config = IndicatorConfig::new().with_signal_level(0.85);
/// let mut indicator = SignalIndicator::new(config).unwrap();
/// let _ = indicator.resize(Size::new(400.0, 100.0));
///
/// let mut canvas = RecordingCanvas::new();
/// indicator.paint(&mut canvas);
/// assert_eq!(canvas.command_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SignalIndicator {
    config: IndicatorConfig,
    padding: Padding,
    metrics: DisplayMetrics,
    frame: Rect,
    draw_area: Rect,
    state: LayoutState,
    test_id_value: Option<String>,
}

impl SignalIndicator {
    /// Build an indicator from a configuration.
    ///
    /// The configuration is normalized first; a zero bar count is rejected.
    pub fn new(config: IndicatorConfig) -> Result<Self> {
        let mut indicator = Self {
            config: config.validated()?,
            padding: Padding::ZERO,
            metrics: DisplayMetrics::default(),
            frame: Rect::default(),
            draw_area: Rect::default(),
            state: LayoutState::Configured,
            test_id_value: None,
        };
        indicator.update_draw_area();
        Ok(indicator)
    }

    /// Set the content padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        let _ = self.set_padding(padding);
        self
    }

    /// Set the display metrics used to convert nominal units.
    #[must_use]
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        let _ = self.set_metrics(metrics);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current (normalized) configuration.
    #[must_use]
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Get the signal level.
    #[must_use]
    pub fn signal_level(&self) -> f32 {
        self.config.signal_level
    }

    /// Get the number of bars.
    #[must_use]
    pub fn bar_count(&self) -> u32 {
        self.config.bar_count
    }

    /// Get the gap between bars.
    #[must_use]
    pub fn bar_gap(&self) -> f32 {
        self.config.bar_gap
    }

    /// Get the bar corner radius.
    #[must_use]
    pub fn bar_corner_radius(&self) -> f32 {
        self.config.bar_corner_radius
    }

    /// Get the fill colors.
    #[must_use]
    pub fn colors(&self) -> &LevelPalette {
        &self.config.colors
    }

    /// Get the content padding.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Get the size last assigned by the host.
    #[must_use]
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// The centered field the bars are drawn in.
    #[must_use]
    pub fn draw_area(&self) -> Rect {
        self.draw_area
    }

    /// Layout cache state.
    #[must_use]
    pub fn layout_state(&self) -> LayoutState {
        self.state
    }

    /// Set the signal level, clamped to `[0, 1]`.
    pub fn set_signal_level(&mut self, level: f32) -> Invalidation {
        let level = normalize_level(level);
        if level == self.config.signal_level {
            return Invalidation::NONE;
        }
        self.config.signal_level = level;
        self.mark_dirty(Invalidation::REDRAW)
    }

    /// Set the number of bars.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidConfiguration`](crate::IndicatorError::InvalidConfiguration)
    /// for a zero count; the current configuration is kept.
    pub fn set_bar_count(&mut self, count: u32) -> Result<Invalidation> {
        let count = check_bar_count(count)?;
        if count == self.config.bar_count {
            return Ok(Invalidation::NONE);
        }
        self.config.bar_count = count;
        Ok(self.mark_dirty(Invalidation::RELAYOUT))
    }

    /// Set the gap between bars; negative or non-finite values become 0.
    pub fn set_bar_gap(&mut self, gap: f32) -> Invalidation {
        let gap = normalize_non_negative("bar gap", gap);
        if gap == self.config.bar_gap {
            return Invalidation::NONE;
        }
        self.config.bar_gap = gap;
        self.mark_dirty(Invalidation::REDRAW)
    }

    /// Set the bar corner radius; negative or non-finite values become 0.
    pub fn set_bar_corner_radius(&mut self, radius: f32) -> Invalidation {
        let radius = normalize_non_negative("bar corner radius", radius);
        if radius == self.config.bar_corner_radius {
            return Invalidation::NONE;
        }
        self.config.bar_corner_radius = radius;
        self.mark_dirty(Invalidation::REDRAW)
    }

    /// Replace the fill colors.
    pub fn set_colors(&mut self, colors: LevelPalette) -> Invalidation {
        if colors == self.config.colors {
            return Invalidation::NONE;
        }
        self.config.colors = colors;
        self.mark_dirty(Invalidation::REDRAW)
    }

    /// Set the content padding.
    pub fn set_padding(&mut self, padding: Padding) -> Invalidation {
        if padding == self.padding {
            return Invalidation::NONE;
        }
        self.padding = padding;
        self.mark_dirty(Invalidation::RELAYOUT)
    }

    /// Set the display metrics.
    pub fn set_metrics(&mut self, metrics: DisplayMetrics) -> Invalidation {
        if metrics == self.metrics {
            return Invalidation::NONE;
        }
        self.metrics = metrics;
        Invalidation {
            relayout: true,
            redraw: false,
        }
    }

    /// Replace the whole configuration and report what changed.
    ///
    /// # Errors
    ///
    /// Fails without modifying the indicator when the new configuration is
    /// invalid.
    pub fn configure(&mut self, config: IndicatorConfig) -> Result<Invalidation> {
        let config = config.validated()?;
        if config == self.config {
            return Ok(Invalidation::NONE);
        }
        let needed = if config.bar_count == self.config.bar_count {
            Invalidation::REDRAW
        } else {
            Invalidation::RELAYOUT
        };
        self.config = config;
        Ok(self.mark_dirty(needed))
    }

    /// Accept a new widget size from the host.
    pub fn resize(&mut self, size: Size) -> Invalidation {
        let unchanged = size == self.frame.size() && self.state == LayoutState::LaidOut;
        self.frame = Rect::new(self.frame.x, self.frame.y, size.width, size.height);
        self.state = LayoutState::LaidOut;
        if unchanged {
            return Invalidation::NONE;
        }
        self.update_draw_area();
        Invalidation::REDRAW
    }

    /// Preferred size under the host's constraints.
    #[must_use]
    pub fn preferred_size(&self, constraints: Constraints) -> Size {
        let horizontal = self.padding.horizontal();
        let vertical = self.padding.vertical();

        let min_width = constraints.min_width + horizontal;
        let min_height = constraints.min_height + vertical;
        let bar_unit = self.metrics.dp_to_px(DESIRED_BAR_WIDTH_DP).trunc();

        let desired = Size::new(
            min_width.max(self.config.bar_count as f32 * bar_unit + horizontal),
            min_height.max(BASE_HEIGHT_PX + vertical),
        );
        constraints.resolve(desired)
    }

    /// Resolve every bar for the current size and configuration.
    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        let level = self.config.signal_level;
        bar_slots(self.draw_area, self.count(), self.config.bar_gap).map(move |slot| {
            let role = bar_color(level, slot.ratio);
            Bar {
                index: slot.index,
                ratio: slot.ratio,
                rect: slot.rect,
                role,
                fill: self.config.colors.color(role),
            }
        })
    }

    fn count(&self) -> NonZeroU32 {
        NonZeroU32::new(self.config.bar_count).unwrap_or(NonZeroU32::MIN)
    }

    fn mark_dirty(&mut self, needed: Invalidation) -> Invalidation {
        self.state = LayoutState::Configured;
        self.update_draw_area();
        needed
    }

    fn update_draw_area(&mut self) {
        self.draw_area = draw_area(self.frame.size(), self.padding, self.count());
        debug!(
            width = self.frame.width,
            height = self.frame.height,
            bars = self.config.bar_count,
            area = ?self.draw_area,
            "draw area updated"
        );
    }
}

impl Widget for SignalIndicator {
    fn measure(&self, constraints: Constraints) -> Size {
        self.preferred_size(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.frame.x = bounds.x;
        self.frame.y = bounds.y;
        let _ = self.resize(bounds.size());
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let radius = self.config.bar_corner_radius;
        trace!(
            level = self.config.signal_level,
            bars = self.config.bar_count,
            "painting signal indicator"
        );
        for bar in self.bars() {
            canvas.fill_round_rect(bar.rect, radius, radius, bar.fill);
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.frame
    }
}
