//! Construction defaults for the segment switch.

use segswitch_core::Color;

/// Fallback values and fixed geometry for a [`SegmentSwitch`].
///
/// Style attributes override the colors and labels; the geometry fields are
/// never overridden by attributes.
///
/// [`SegmentSwitch`]: crate::SegmentSwitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchDefaults {
    /// Track color
    pub background_color: Color,
    /// Active indicator color
    pub cursor_color: Color,
    /// Left label color
    pub checked_text_color: Color,
    /// Right label color
    pub unchecked_text_color: Color,
    /// Left label
    pub left_text: &'static str,
    /// Right label
    pub right_text: &'static str,
    /// Width in dp when the parent imposes no width
    pub default_size_dp: u32,
    /// Corner radius of the track and the indicator
    pub corner_radius: f32,
    /// Gap between the indicator and the track edges / midline
    pub inset: i32,
    /// Label size as a fraction of the widget height
    pub text_scale: f32,
    /// Measured height is the measured width divided by this
    pub aspect_divisor: u32,
}

impl SwitchDefaults {
    /// Stock look: gray track, green cursor, white labels.
    pub const STANDARD: Self = Self {
        background_color: Color::GRAY,
        cursor_color: Color::GREEN,
        checked_text_color: Color::WHITE,
        unchecked_text_color: Color::WHITE,
        left_text: "left",
        right_text: "right",
        default_size_dp: 140,
        corner_radius: 50.0,
        inset: 10,
        text_scale: 0.33,
        aspect_divisor: 5,
    };
}

impl Default for SwitchDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defaults() {
        let d = SwitchDefaults::default();
        assert_eq!(d.background_color, Color::GRAY);
        assert_eq!(d.cursor_color, Color::GREEN);
        assert_eq!(d.checked_text_color, Color::WHITE);
        assert_eq!(d.unchecked_text_color, Color::WHITE);
        assert_eq!(d.left_text, "left");
        assert_eq!(d.right_text, "right");
        assert_eq!(d.aspect_divisor, 5);
    }
}
