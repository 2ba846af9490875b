//! Test harness that plays the host view lifecycle.
//!
//! The harness stands in for the UI toolkit: it measures, resizes, paints only
//! when asked to, dispatches taps, and tears widgets down and recreates them
//! with their saved state.

use segswitch_core::{
    Constraints, DrawCommand, Event, MeasureSpec, Rect, RecordingCanvas, Size, StateError,
    ViewState, Widget,
};
use std::any::Any;

/// Host driver for a single widget.
pub struct Harness<W: Widget> {
    widget: W,
    bounds: Rect,
    host_state: ViewState,
    frames: usize,
}

impl<W: Widget> Harness<W> {
    /// Mount a widget.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            bounds: Rect::default(),
            host_state: ViewState::EMPTY,
            frames: 0,
        }
    }

    /// Set the host's own view state saved underneath the widget's.
    #[must_use]
    pub fn with_host_state(mut self, state: ViewState) -> Self {
        self.host_state = state;
        self
    }

    /// Borrow the mounted widget.
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutably borrow the mounted widget.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// The host's own view state, as last handed back by a restore.
    pub const fn host_state(&self) -> &ViewState {
        &self.host_state
    }

    /// Number of frames actually painted.
    pub const fn frames_painted(&self) -> usize {
        self.frames
    }

    // === Lifecycle ===

    /// Ask the widget for its measured size.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.widget.measure(Constraints::from_specs(width, height))
    }

    /// Assign a size at the origin.
    pub fn resize(&mut self, width: f32, height: f32) -> &mut Self {
        self.bounds = Rect::new(0.0, 0.0, width, height);
        self.widget.layout(self.bounds);
        self
    }

    /// Measure with the given specs and lay out at the measured size.
    pub fn measure_and_layout(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = self.measure(width, height);
        self.resize(size.width, size.height);
        size
    }

    /// Run one frame. Paints only if the widget requested it.
    pub fn frame(&mut self) -> Option<Vec<DrawCommand>> {
        if !self.widget.needs_paint() {
            return None;
        }
        let mut canvas = RecordingCanvas::new();
        self.widget.paint(&mut canvas);
        self.widget.mark_painted();
        self.frames += 1;
        Some(canvas.take_commands())
    }

    // === Input ===

    /// Dispatch a tap.
    pub fn tap(&mut self) -> Option<Box<dyn Any + Send>> {
        self.dispatch(&Event::Tap)
    }

    /// Dispatch an arbitrary event.
    pub fn dispatch(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.widget.event(event)
    }

    // === Teardown / recreate ===

    /// Save state, drop the widget, build a new one and restore into it.
    ///
    /// The new widget is laid out at the previous bounds, as a host does
    /// after a configuration change.
    pub fn recreate(&mut self, build: impl FnOnce() -> W) -> Result<(), StateError> {
        let saved = self.widget.save_state(self.host_state.clone())?;
        log::debug!("harness recreating widget ({} saved bytes)", saved.as_bytes().len());

        let mut fresh = build();
        self.host_state = fresh.restore_state(&saved)?;
        fresh.layout(self.bounds);
        self.widget = fresh;
        Ok(())
    }
}
