//! Layout constraints and per-axis measure specs.
//!
//! [`Constraints`] is the min/max box handed down by a parent. Widgets that
//! size themselves in whole pixels read each axis as a [`MeasureSpec`]
//! instead, which is how mobile view hosts phrase the same request.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Build constraints from a pair of measure specs.
    ///
    /// `AtMost(0)` reads back as `Exactly(0)`; both resolve to zero.
    #[must_use]
    pub fn from_specs(width: MeasureSpec, height: MeasureSpec) -> Self {
        let (min_width, max_width) = width.range();
        let (min_height, max_height) = height.range();
        Self::new(min_width, max_width, min_height, max_height)
    }

    /// The horizontal axis as a measure spec.
    #[must_use]
    pub fn width_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_width, self.max_width)
    }

    /// The vertical axis as a measure spec.
    #[must_use]
    pub fn height_spec(&self) -> MeasureSpec {
        MeasureSpec::from_range(self.min_height, self.max_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A single-axis size request in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// No constraint; the widget picks its own size.
    #[default]
    Unspecified,
    /// The widget may be at most this large.
    AtMost(u32),
    /// The widget must be exactly this large.
    Exactly(u32),
}

impl MeasureSpec {
    /// Read a min/max range as a spec.
    ///
    /// An equal finite pair is `Exactly`, a finite maximum is `AtMost`, and an
    /// infinite maximum is `Unspecified`. Fractional pixels truncate.
    #[must_use]
    pub fn from_range(min: f32, max: f32) -> Self {
        if !max.is_finite() {
            Self::Unspecified
        } else if min == max {
            Self::Exactly(max.max(0.0) as u32)
        } else {
            Self::AtMost(max.max(0.0) as u32)
        }
    }

    /// Resolve to a concrete size, using `unspecified` when unconstrained.
    ///
    /// `AtMost` takes the full allowance rather than shrinking to content.
    #[must_use]
    pub const fn resolve(self, unspecified: u32) -> u32 {
        match self {
            Self::Unspecified => unspecified,
            Self::AtMost(size) | Self::Exactly(size) => size,
        }
    }

    /// The min/max range this spec allows.
    #[must_use]
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::Unspecified => (0.0, f32::INFINITY),
            Self::AtMost(size) => (0.0, size as f32),
            Self::Exactly(size) => (size as f32, size as f32),
        }
    }

    /// The pixel size carried by the spec, if any.
    #[must_use]
    pub const fn size(self) -> Option<u32> {
        match self {
            Self::Unspecified => None,
            Self::AtMost(size) | Self::Exactly(size) => Some(size),
        }
    }
}
