//! Display metrics for converting density-independent units to pixels.

use serde::{Deserialize, Serialize};

/// Properties of the display a widget is rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel (1.0 at 160 dpi).
    pub density: f32,
}

impl DisplayMetrics {
    /// Baseline density.
    pub const BASELINE: Self = Self { density: 1.0 };

    /// Create metrics for a density, clamping non-positive values to baseline.
    #[must_use]
    pub fn new(density: f32) -> Self {
        if density.is_finite() && density > 0.0 {
            Self { density }
        } else {
            Self::BASELINE
        }
    }

    /// Convert density-independent pixels to whole device pixels (truncating).
    #[must_use]
    pub fn dp_to_px(&self, dp: u32) -> u32 {
        (dp as f32 * self.density) as u32
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_baseline() {
        assert_eq!(DisplayMetrics::default().dp_to_px(140), 140);
    }

    #[test]
    fn test_dp_to_px_truncates() {
        assert_eq!(DisplayMetrics::new(2.75).dp_to_px(140), 385);
        assert_eq!(DisplayMetrics::new(1.33).dp_to_px(140), 186);
    }

    #[test]
    fn test_invalid_density_falls_back() {
        assert_eq!(DisplayMetrics::new(0.0), DisplayMetrics::BASELINE);
        assert_eq!(DisplayMetrics::new(-2.0), DisplayMetrics::BASELINE);
        assert_eq!(DisplayMetrics::new(f32::NAN), DisplayMetrics::BASELINE);
    }
}
