//! Integration tests for signal-level.
//!
//! These drive the indicator the way a host would: configure, measure,
//! lay out, paint, and react to the returned invalidations.

use proptest::prelude::*;
use signal_level::{
    bar_color, Canvas, Color, Constraints, DrawCommand, IndicatorConfig, IndicatorError,
    Invalidation, LayoutState, LevelColor, LevelPalette, MeasureSpec, Padding, Rect,
    RecordingCanvas, SignalIndicator, Size, Widget,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("signal_level=trace"))
        .with_test_writer()
        .try_init();
}

/// Minimal host: owns the widget and applies invalidations.
struct Host {
    widget: SignalIndicator,
    constraints: Constraints,
    frames: Vec<Vec<DrawCommand>>,
    measures: usize,
}

impl Host {
    fn new(widget: SignalIndicator, constraints: Constraints) -> Self {
        let mut host = Self {
            widget,
            constraints,
            frames: Vec::new(),
            measures: 0,
        };
        host.apply(Invalidation::RELAYOUT);
        host
    }

    fn apply(&mut self, inv: Invalidation) {
        if inv.relayout {
            self.measures += 1;
            let size = self.widget.measure(self.constraints);
            self.widget.layout(Rect::from_size(size));
        }
        if inv.redraw {
            let mut canvas = RecordingCanvas::new();
            self.widget.paint(&mut canvas);
            self.frames.push(canvas.take_commands());
        }
    }

    fn last_frame(&self) -> &[DrawCommand] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Canvas that only counts calls, to check the trait seam works with a
/// non-recording backend.
#[derive(Default)]
struct CountingCanvas {
    round_rects: usize,
}

impl Canvas for CountingCanvas {
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}

    fn fill_round_rect(&mut self, _rect: Rect, _rx: f32, _ry: f32, _color: Color) {
        self.round_rects += 1;
    }
}

#[test]
fn test_end_to_end_high_signal() {
    init_tracing();
    let config = IndicatorConfig::new()
        .with_bar_count(4)
        .with_bar_gap(20.0)
        .with_signal_level(0.85);
    let widget = SignalIndicator::new(config).unwrap();
    let host = Host::new(widget, Constraints::tight(Size::new(400.0, 100.0)));

    let frame = host.last_frame();
    assert_eq!(frame.len(), 4);
    for (i, cmd) in frame.iter().enumerate() {
        let offset = 100.0 * i as f32;
        assert_eq!(cmd.bounds().left(), offset + 20.0);
        assert_eq!(cmd.bounds().right(), offset + 80.0);
        assert_eq!(cmd.color(), LevelColor::High.default_color());
    }
}

#[test]
fn test_host_only_remeasures_when_asked() {
    init_tracing();
    let widget = SignalIndicator::new(IndicatorConfig::new()).unwrap();
    let mut host = Host::new(widget, Constraints::loose(Size::new(800.0, 200.0)));
    assert_eq!(host.measures, 1);

    let inv = host.widget.set_signal_level(0.6);
    host.apply(inv);
    assert_eq!(host.measures, 1);
    assert_eq!(host.frames.len(), 2);

    let inv = host.widget.set_bar_count(6).unwrap();
    host.apply(inv);
    assert_eq!(host.measures, 2);
    assert_eq!(host.last_frame().len(), 6);
    assert_eq!(host.widget.layout_state(), LayoutState::LaidOut);
}

#[test]
fn test_measure_then_layout_under_loose_constraints() {
    let widget = SignalIndicator::new(IndicatorConfig::new().with_bar_count(5))
        .unwrap()
        .with_padding(Padding::uniform(10.0));
    let host = Host::new(widget, Constraints::loose(Size::new(1000.0, 300.0)));

    // desired width 5 * 50 + 20 = 270, height min(420, 300) = 300
    assert_eq!(host.widget.size(), Size::new(270.0, 300.0));
    // safe area 250 x 280: cells are 50 wide
    assert_eq!(host.widget.draw_area(), Rect::new(10.0, 10.0, 250.0, 280.0));
}

#[test]
fn test_unspecified_width_exact_height() {
    let widget = SignalIndicator::new(IndicatorConfig::new()).unwrap();
    let c = Constraints::new(0.0, 0.0, MeasureSpec::Unspecified, MeasureSpec::Exact(48.0));
    assert_eq!(widget.measure(c), Size::new(200.0, 48.0));
}

#[test]
fn test_yaml_configured_widget() {
    let yaml = r##"
signal_level: 0.3
signal_bars_count: 5
low_level_color: "#112233"
"##;
    let config = IndicatorConfig::from_yaml_str(yaml).unwrap();
    let mut widget = SignalIndicator::new(config).unwrap();
    let _ = widget.resize(Size::new(500.0, 100.0));

    // Attribute fallback gap.
    assert_eq!(widget.bar_gap(), 5.0);

    // ratio 0.2 is not < 0.2, so nothing is lit with five bars.
    assert!(widget.bars().all(|b| b.role == LevelColor::Empty));

    let _ = widget.set_bar_count(10).unwrap();
    let lit: Vec<_> = widget.bars().filter(|b| b.role == LevelColor::Low).collect();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].fill, Color::rgb8(0x11, 0x22, 0x33));
}

#[test]
fn test_invalid_yaml_reports_error() {
    let err = IndicatorConfig::from_yaml_str("signal_bars_count: 0").unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidConfiguration(_)));

    let err = IndicatorConfig::from_yaml_str("signal_level: [1, 2]").unwrap_err();
    assert!(matches!(err, IndicatorError::Parse { .. }));
}

#[test]
fn test_custom_canvas_backend() {
    let mut widget = SignalIndicator::new(IndicatorConfig::new().with_bar_count(9)).unwrap();
    let _ = widget.resize(Size::new(900.0, 100.0));
    let mut canvas = CountingCanvas::default();
    widget.paint(&mut canvas);
    assert_eq!(canvas.round_rects, 9);
}

#[test]
fn test_draw_commands_serialize() {
    let mut widget = SignalIndicator::new(IndicatorConfig::new().with_signal_level(0.9)).unwrap();
    let _ = widget.resize(Size::new(400.0, 100.0));
    let mut canvas = RecordingCanvas::new();
    widget.paint(&mut canvas);

    let json = serde_json::to_string(canvas.commands()).unwrap();
    let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), canvas.commands());
}

#[test]
fn test_palette_swap_changes_only_colors() {
    let mut widget = SignalIndicator::new(IndicatorConfig::new().with_signal_level(0.9)).unwrap();
    let _ = widget.resize(Size::new(400.0, 100.0));
    let before: Vec<Rect> = widget.bars().map(|b| b.rect).collect();

    let inv = widget.set_colors(LevelPalette::default().high(Color::BLACK));
    assert_eq!(inv, Invalidation::REDRAW);
    let after: Vec<Rect> = widget.bars().map(|b| b.rect).collect();
    assert_eq!(before, after);
    assert!(widget.bars().all(|b| b.fill == Color::BLACK));
}

proptest! {
    #[test]
    fn prop_paint_draws_bar_count(
        n in 1u32..40,
        w in 1.0f32..2000.0,
        h in 1.0f32..2000.0,
        level in 0.0f32..=1.0,
        gap in 0.0f32..30.0,
    ) {
        let config = IndicatorConfig::new()
            .with_bar_count(n)
            .with_signal_level(level)
            .with_bar_gap(gap);
        let mut widget = SignalIndicator::new(config).unwrap();
        let _ = widget.resize(Size::new(w, h));
        let mut canvas = RecordingCanvas::new();
        widget.paint(&mut canvas);
        prop_assert_eq!(canvas.command_count(), n as usize);
    }

    #[test]
    fn prop_bar_fill_matches_rule(
        n in 1u32..40,
        level in 0.0f32..=1.0,
    ) {
        let mut widget = SignalIndicator::new(
            IndicatorConfig::new().with_bar_count(n).with_signal_level(level),
        ).unwrap();
        let _ = widget.resize(Size::new(400.0, 100.0));
        for bar in widget.bars() {
            prop_assert_eq!(bar.role, bar_color(level, bar.ratio));
            prop_assert_eq!(bar.fill, widget.colors().color(bar.role));
        }
    }

    #[test]
    fn prop_resize_roundtrip(
        w in 1.0f32..2000.0,
        h in 1.0f32..2000.0,
        w2 in 1.0f32..2000.0,
        h2 in 1.0f32..2000.0,
        n in 1u32..20,
    ) {
        let mut widget = SignalIndicator::new(IndicatorConfig::new().with_bar_count(n)).unwrap();
        let _ = widget.resize(Size::new(w, h));
        let original = widget.draw_area();
        let _ = widget.resize(Size::new(w2, h2));
        let _ = widget.resize(Size::new(w, h));
        prop_assert_eq!(widget.draw_area(), original);
    }
}
