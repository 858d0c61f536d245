//! Core types and traits for the signal-level indicator.
//!
//! This crate provides the primitives the indicator is built on:
//! - Geometric primitives: [`Size`], [`Rect`], [`Padding`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`], [`MeasureSpec`], [`DisplayMetrics`]
//! - Painting: the [`Canvas`] trait, [`DrawCommand`] and [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, DisplayMetrics, MeasureSpec};
pub use draw::DrawCommand;
pub use geometry::{Padding, Rect, Size};
pub use widget::{Canvas, LayoutResult, Widget};
