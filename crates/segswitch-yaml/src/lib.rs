//! YAML style-attribute source for the segswitch widget.

mod attributes;
mod error;

pub use attributes::{StyleAttributes, ATTRIBUTE_NAMES};
pub use error::ParseError;
