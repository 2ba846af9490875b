//! Pixel layout of the segment switch.

use segswitch_core::IntRect;

/// The three rectangles a switch paints into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchLayout {
    /// Whole track
    pub body: IntRect,
    /// Left indicator slot
    pub left: IntRect,
    /// Right indicator slot
    pub right: IntRect,
}

impl SwitchLayout {
    /// Split a `width` x `height` body into two inset halves.
    ///
    /// Returns `None` for a zero width, which hosts report before the first
    /// real layout pass. The midline uses truncating division. Sizes beyond
    /// the pixel coordinate range clamp to `i32::MAX`.
    #[must_use]
    pub fn compute(width: u32, height: u32, inset: i32) -> Option<Self> {
        if width == 0 {
            return None;
        }
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        let mid = w / 2;

        Some(Self {
            body: IntRect::new(0, 0, w, h),
            left: IntRect::new(inset, inset, mid.saturating_sub(inset), h.saturating_sub(inset)),
            right: IntRect::new(
                mid.saturating_add(inset),
                inset,
                w.saturating_sub(inset),
                h.saturating_sub(inset),
            ),
        })
    }
}
