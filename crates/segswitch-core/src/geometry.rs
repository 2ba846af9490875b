//! Geometric primitives: Point, Size, Rect, `IntRect`, `CornerRadius`.
//!
//! Layout happens in whole device pixels ([`IntRect`]); painting happens in
//! floating point ([`Rect`]).

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Move the rectangle by an offset.
    #[must_use]
    pub fn translate(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// An integer pixel rectangle stored as edges.
///
/// `right` and `bottom` are exclusive, so `width() == right - left`. Edges are
/// not normalized: a rectangle laid out in too little space may come out
/// inverted, in which case [`IntRect::is_empty`] is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntRect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl IntRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Horizontal center without integer rounding.
    #[must_use]
    pub fn exact_center_x(&self) -> f32 {
        (self.left + self.right) as f32 * 0.5
    }

    /// Vertical center without integer rounding.
    #[must_use]
    pub fn exact_center_y(&self) -> f32 {
        (self.top + self.bottom) as f32 * 0.5
    }

    /// Check whether two rectangles share any pixel.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Convert to a floating point paint rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left as f32,
            self.top as f32,
            self.width() as f32,
            self.height() as f32,
        )
    }
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
}

impl CornerRadius {
    /// Zero radius
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create uniform corner radius.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Check if all corners have the same radius.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_add() {
        let sum = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(sum, Point::new(4.0, 6.0));
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).translate(Point::new(5.0, -5.0));
        assert_eq!(r, Rect::new(15.0, 15.0, 30.0, 40.0));
    }

    #[test]
    fn test_rect_contains_point_edges() {
        let r = Rect::new(10.0, 10.0, 100.0, 20.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(110.0, 30.0)));
        assert!(!r.contains_point(&Point::new(9.9, 15.0)));
        assert!(!r.contains_point(&Point::new(50.0, 30.1)));
    }

    #[test]
    fn test_int_rect_extent() {
        let r = IntRect::new(10, 10, 140, 50);
        assert_eq!(r.width(), 130);
        assert_eq!(r.height(), 40);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_int_rect_exact_center() {
        let r = IntRect::new(0, 0, 301, 61);
        assert_eq!(r.exact_center_x(), 150.5);
        assert_eq!(r.exact_center_y(), 30.5);
    }

    #[test]
    fn test_int_rect_inverted_is_empty() {
        let r = IntRect::new(10, 10, 0, 5);
        assert!(r.is_empty());
        assert!(!r.intersects(&IntRect::new(0, 0, 100, 100)));
    }

    #[test]
    fn test_int_rect_touching_edges_do_not_intersect() {
        let a = IntRect::new(0, 0, 50, 10);
        let b = IntRect::new(50, 0, 100, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&IntRect::new(49, 0, 60, 10)));
    }

    #[test]
    fn test_int_rect_to_rect() {
        let r = IntRect::new(160, 10, 290, 50).to_rect();
        assert_eq!(r, Rect::new(160.0, 10.0, 130.0, 40.0));
    }

    #[test]
    fn test_corner_radius_uniform() {
        let r = CornerRadius::uniform(50.0);
        assert!(r.is_uniform());
        assert_eq!(r.bottom_left, 50.0);
        assert_eq!(CornerRadius::default(), CornerRadius::ZERO);
    }

    proptest! {
        #[test]
        fn prop_int_rect_to_rect_preserves_extent(
            l in -1000i32..1000, t in -1000i32..1000, w in 0i32..1000, h in 0i32..1000
        ) {
            let r = IntRect::new(l, t, l + w, t + h);
            let f = r.to_rect();
            prop_assert_eq!(f.width, w as f32);
            prop_assert_eq!(f.height, h as f32);
            prop_assert!(f.contains_point(&Point::new(r.exact_center_x(), r.exact_center_y())));
        }
    }
}
