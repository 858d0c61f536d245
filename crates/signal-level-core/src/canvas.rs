//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::widget::Canvas;
use crate::{Color, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Useful for tests (verify what was painted) and for hosts that replay the
/// commands on their own backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn fill_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRect {
            bounds: rect,
            radius_x,
            radius_y,
            color,
        });
    }
}
