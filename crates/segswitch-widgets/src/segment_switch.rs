//! Two-segment toggle switch widget.
//!
//! A rounded track split into a left and a right half, each carrying a label.
//! A rounded cursor covers the left half while the switch is on and the right
//! half while it is off. Any tap flips the state.

use crate::defaults::SwitchDefaults;
use crate::layout::SwitchLayout;
use segswitch_core::{
    widget::LayoutResult, Canvas, Color, Constraints, DisplayMetrics, Event, IntRect,
    MeasureSpec, MouseButton, Point, Rect, Size, StateError, TextAlign, TextStyle, TypeId,
    ViewState, Widget,
};
use segswitch_yaml::StyleAttributes;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message emitted when the switch state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToggled {
    /// The new state
    pub on: bool,
}

/// Persistent part of a switch, layered over the host's own blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSavedState {
    /// Host state saved underneath this record
    pub superstate: ViewState,
    /// 1 when on, 0 when off
    pub checked: u8,
}

impl SwitchSavedState {
    /// Wrap `superstate` with the given switch state.
    #[must_use]
    pub fn new(superstate: ViewState, on: bool) -> Self {
        Self {
            superstate,
            checked: u8::from(on),
        }
    }

    /// Whether the saved flag means "on".
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked == 1
    }

    /// Special-content flags for the host's parcel machinery; always none.
    #[must_use]
    pub const fn describe_contents(&self) -> u32 {
        0
    }
}

/// Two-segment toggle switch.
///
/// Colors and labels are fixed at construction. Layout is in whole pixels
/// relative to the origin handed to [`Widget::layout`].
#[derive(Debug, Clone)]
pub struct SegmentSwitch {
    on: bool,
    background_color: Color,
    cursor_color: Color,
    checked_text_color: Color,
    unchecked_text_color: Color,
    left_label: String,
    right_label: String,
    defaults: SwitchDefaults,
    display: DisplayMetrics,
    layout: SwitchLayout,
    origin: Point,
    dirty: bool,
    test_id_value: Option<String>,
}

impl Default for SegmentSwitch {
    fn default() -> Self {
        Self::with_defaults(None, SwitchDefaults::STANDARD)
    }
}

impl SegmentSwitch {
    /// Create a switch with the stock look.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch styled by `attrs`, falling back to the stock look.
    #[must_use]
    pub fn styled(attrs: &StyleAttributes) -> Self {
        Self::with_defaults(Some(attrs), SwitchDefaults::STANDARD)
    }

    /// Create a switch from optional attributes and an explicit defaults record.
    #[must_use]
    pub fn with_defaults(attrs: Option<&StyleAttributes>, defaults: SwitchDefaults) -> Self {
        let empty = StyleAttributes::default();
        let attrs = attrs.unwrap_or(&empty);

        Self {
            on: true,
            background_color: attrs.background_color.unwrap_or(defaults.background_color),
            cursor_color: attrs.cursor_color.unwrap_or(defaults.cursor_color),
            checked_text_color: attrs
                .checked_text_color
                .unwrap_or(defaults.checked_text_color),
            unchecked_text_color: attrs
                .unchecked_text_color
                .unwrap_or(defaults.unchecked_text_color),
            left_label: attrs
                .left_text
                .clone()
                .unwrap_or_else(|| defaults.left_text.to_string()),
            right_label: attrs
                .right_text
                .clone()
                .unwrap_or_else(|| defaults.right_text.to_string()),
            defaults,
            display: DisplayMetrics::default(),
            layout: SwitchLayout::default(),
            origin: Point::ORIGIN,
            dirty: true,
            test_id_value: None,
        }
    }

    /// Set the display the switch is measured for.
    #[must_use]
    pub const fn display(mut self, display: DisplayMetrics) -> Self {
        self.display = display;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    /// Track color.
    #[must_use]
    pub const fn background_color(&self) -> Color {
        self.background_color
    }

    /// Cursor color, used for both positions.
    #[must_use]
    pub const fn cursor_color(&self) -> Color {
        self.cursor_color
    }

    /// Left label color.
    #[must_use]
    pub const fn checked_text_color(&self) -> Color {
        self.checked_text_color
    }

    /// Right label color.
    #[must_use]
    pub const fn unchecked_text_color(&self) -> Color {
        self.unchecked_text_color
    }

    /// Left label.
    #[must_use]
    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    /// Right label.
    #[must_use]
    pub fn right_label(&self) -> &str {
        &self.right_label
    }

    /// Current pixel layout.
    #[must_use]
    pub const fn switch_layout(&self) -> &SwitchLayout {
        &self.layout
    }

    /// The half the cursor currently covers.
    #[must_use]
    pub const fn cursor_bounds(&self) -> IntRect {
        if self.on {
            self.layout.left
        } else {
            self.layout.right
        }
    }

    /// Flip the state and request a repaint. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.dirty = true;
        log::debug!("segment switch toggled: on={}", self.on);
        self.on
    }

    /// Resolve the measured size in pixels.
    ///
    /// Width follows `width_spec`; an unspecified width uses the default size
    /// at the current display density. Height is always width divided by the
    /// aspect divisor, whatever `height_spec` asks for.
    #[must_use]
    pub fn measure_spec(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
        let fallback = self.display.dp_to_px(self.defaults.default_size_dp);
        let width = width_spec.resolve(fallback);
        let height = width / self.defaults.aspect_divisor.max(1);
        log::trace!(
            "segment switch measured {width}x{height} (width {width_spec:?}, height {height_spec:?})"
        );
        (width, height)
    }

    /// Recompute the layout after the host changed the size.
    ///
    /// A zero width means the host has not laid the widget out yet; the
    /// previous layout is kept.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        match SwitchLayout::compute(width, height, self.defaults.inset) {
            Some(layout) => {
                log::trace!("segment switch resized to {width}x{height}");
                if layout != self.layout {
                    self.dirty = true;
                }
                self.layout = layout;
            }
            None => log::trace!("segment switch resize skipped: zero width"),
        }
    }

    fn text_size(&self) -> f32 {
        self.layout.body.height() as f32 * self.defaults.text_scale
    }

    fn draw_label(
        &self,
        canvas: &mut dyn Canvas,
        text: &str,
        slot: IntRect,
        baseline: f32,
        color: Color,
    ) {
        let style = TextStyle {
            size: self.text_size(),
            color,
            align: TextAlign::Center,
        };
        let position = Point::new(slot.exact_center_x(), baseline) + self.origin;
        canvas.draw_text(text, position, &style);
    }
}

impl Widget for SegmentSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let (width, height) =
            self.measure_spec(constraints.width_spec(), constraints.height_spec());
        Size::new(width as f32, height as f32)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let origin = bounds.origin();
        if origin != self.origin {
            self.origin = origin;
            self.dirty = true;
        }
        self.on_resize(bounds.width as u32, bounds.height as u32);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let radius = self.defaults.corner_radius;

        canvas.fill_rounded_rect(
            self.layout.body.to_rect().translate(self.origin),
            radius,
            self.background_color,
        );
        canvas.fill_rounded_rect(
            self.cursor_bounds().to_rect().translate(self.origin),
            radius,
            self.cursor_color,
        );

        let metrics = canvas.font_metrics(self.text_size());
        let baseline = metrics.centered_baseline(self.layout.body.exact_center_y());
        self.draw_label(
            canvas,
            &self.left_label,
            self.layout.left,
            baseline,
            self.checked_text_color,
        );
        self.draw_label(
            canvas,
            &self.right_label,
            self.layout.right,
            baseline,
            self.unchecked_text_color,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let hit = match event {
            Event::Tap => true,
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => !self.layout.body.is_empty() && self.bounds().contains_point(position),
            Event::MouseDown { .. } | Event::MouseUp { .. } => false,
        };

        if hit {
            let on = self.toggle();
            Some(Box::new(SwitchToggled { on }))
        } else {
            None
        }
    }

    fn needs_paint(&self) -> bool {
        self.dirty
    }

    fn mark_painted(&mut self) {
        self.dirty = false;
    }

    fn save_state(&self, base: ViewState) -> Result<ViewState, StateError> {
        ViewState::encode(&SwitchSavedState::new(base, self.on))
    }

    fn restore_state(&mut self, state: &ViewState) -> Result<ViewState, StateError> {
        if state.is_empty() {
            return Ok(ViewState::EMPTY);
        }
        let saved: SwitchSavedState = state.decode()?;
        self.on = saved.is_checked();
        self.dirty = true;
        log::debug!("segment switch restored: on={}", self.on);
        Ok(saved.superstate)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.layout.body.to_rect().translate(self.origin)
    }
}
