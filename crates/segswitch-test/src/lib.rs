//! Testing harness for segswitch widgets.
//!
//! ```
//! use segswitch_core::{MeasureSpec, Rect, Size};
//! use segswitch_test::Harness;
//! # use segswitch_core::{Canvas, Constraints, Event, LayoutResult, TypeId, Widget};
//! # use std::any::Any;
//! # struct Dot;
//! # impl Widget for Dot {
//! #     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//! #     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(8.0, 8.0)) }
//! #     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//! #     fn paint(&self, _: &mut dyn Canvas) {}
//! #     fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> { None }
//! # }
//! let mut harness = Harness::new(Dot);
//! let size = harness.measure_and_layout(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
//! assert_eq!(size, Size::new(8.0, 8.0));
//! ```

mod harness;

pub use harness::Harness;
