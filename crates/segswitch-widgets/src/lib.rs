//! Two-segment toggle switch widget.

mod defaults;
mod layout;
pub mod segment_switch;

pub use defaults::SwitchDefaults;
pub use layout::SwitchLayout;
pub use segment_switch::{SegmentSwitch, SwitchSavedState, SwitchToggled};
