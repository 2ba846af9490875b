//! Widget trait and related types.
//!
//! This module defines the core `Widget` trait and the `Canvas` surface
//! widgets paint onto.
//!
//! # Widget Lifecycle
//!
//! A host drives every widget through the same cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Receive the final bounds and derive internal geometry
//! 3. **Paint**: Emit draw calls, only when the widget asked for a repaint
//! 4. **Event**: React to input, possibly asking for a repaint
//!
//! Around teardown/recreate the host additionally calls `save_state` on the
//! old instance and `restore_state` on the new one.
//!
//! # Examples
//!
//! ```
//! use segswitch_core::{TextAlign, TextStyle, TypeId, Color};
//!
//! let style = TextStyle {
//!     size: 19.8,
//!     color: Color::WHITE,
//!     align: TextAlign::Center,
//! };
//! assert_eq!(style.align, TextAlign::Center);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::state::{StateError, ViewState};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
///
/// All methods run on the host's UI thread.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute the measured size for the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept final bounds from the parent.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, returning a message when state changed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether state changed since the last paint.
    fn needs_paint(&self) -> bool {
        false
    }

    /// Called by the host after a paint pass has been presented.
    fn mark_painted(&mut self) {}

    /// Layer this widget's persistent state on top of the host's blob.
    ///
    /// Widgets without persistent state hand the base back untouched.
    fn save_state(&self, base: ViewState) -> Result<ViewState, StateError> {
        Ok(base)
    }

    /// Read this widget's layer out of a saved blob and return the host's
    /// base blob underneath it.
    fn restore_state(&mut self, state: &ViewState) -> Result<ViewState, StateError> {
        Ok(state.clone())
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
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

    /// Draw a filled rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw text with its baseline at `position.y`.
    ///
    /// `position.x` is interpreted according to `style.align`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Font metrics for text drawn at `size`.
    fn font_metrics(&self, size: f32) -> FontMetrics {
        FontMetrics::for_size(size)
    }
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal anchoring relative to the draw position
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Position is the start of the run
    #[default]
    Left,
    /// Position is the middle of the run
    Center,
    /// Position is the end of the run
    Right,
}

/// Vertical font metrics relative to the baseline.
///
/// Follows the y-down convention: `ascent` is negative (above the baseline)
/// and `descent` is positive (below it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Distance from baseline to the top of the tallest glyph (negative)
    pub ascent: f32,
    /// Distance from baseline to the bottom of the lowest glyph (positive)
    pub descent: f32,
}

impl FontMetrics {
    const ASCENT_RATIO: f32 = -0.928;
    const DESCENT_RATIO: f32 = 0.244;

    /// Approximate metrics for a typical sans-serif UI face.
    #[must_use]
    pub fn for_size(size: f32) -> Self {
        Self {
            ascent: size * Self::ASCENT_RATIO,
            descent: size * Self::DESCENT_RATIO,
        }
    }

    /// Baseline that vertically centers the glyph box on `center_y`.
    #[must_use]
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y - (self.ascent + self.descent) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        let id1 = TypeId::of::<u32>();
        let id2 = TypeId::of::<u32>();
        let id3 = TypeId::of::<String>();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.align, TextAlign::Left);
    }

    #[test]
    fn test_font_metrics_signs() {
        let m = FontMetrics::for_size(20.0);
        assert!(m.ascent < 0.0);
        assert!(m.descent > 0.0);
    }

    #[test]
    fn test_centered_baseline_sits_below_center() {
        let m = FontMetrics::for_size(20.0);
        let baseline = m.centered_baseline(30.0);
        assert!(baseline > 30.0);
        // glyph box straddles the center evenly
        let top = baseline + m.ascent;
        let bottom = baseline + m.descent;
        assert!(((top + bottom) / 2.0 - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_centered_baseline_symmetric_metrics() {
        let m = FontMetrics {
            ascent: -10.0,
            descent: 10.0,
        };
        assert_eq!(m.centered_baseline(25.0), 25.0);
    }

    #[test]
    fn test_layout_result_default() {
        let result = LayoutResult::default();
        assert_eq!(result.size, Size::new(0.0, 0.0));
    }
}
