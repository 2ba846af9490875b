//! Core types and traits for the segswitch widget.
//!
//! This crate models the host toolkit surface a widget needs:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`IntRect`]
//! - Color representation: [`Color`]
//! - Sizing requests: [`Constraints`], [`MeasureSpec`], [`DisplayMetrics`]
//! - Input: [`Event`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Persistence: [`ViewState`]

pub mod canvas;
mod color;
mod constraints;
mod display;
pub mod draw;
mod event;
mod geometry;
mod state;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, MeasureSpec};
pub use display::DisplayMetrics;
pub use draw::DrawCommand;
pub use event::{Event, MouseButton};
pub use geometry::{CornerRadius, IntRect, Point, Rect, Size};
pub use state::{StateError, ViewState};
pub use widget::{Canvas, FontMetrics, LayoutResult, TextAlign, TextStyle, TypeId, Widget};
