//! End-to-end lifecycle tests: the harness acting as host for a real switch.

use proptest::prelude::*;
use segswitch_core::{Color, DrawCommand, MeasureSpec, Rect, Size, ViewState, Widget};
use segswitch_test::Harness;
use segswitch_widgets::{SegmentSwitch, SwitchToggled};
use segswitch_yaml::StyleAttributes;

fn cursor_rect(commands: &[DrawCommand]) -> Rect {
    commands[1].rect_bounds().expect("cursor is the second rect")
}

#[test]
fn test_exactly_300_scenario() {
    let mut harness = Harness::new(SegmentSwitch::new());

    let size = harness.measure(MeasureSpec::Exactly(300), MeasureSpec::AtMost(1000));
    assert_eq!(size, Size::new(300.0, 60.0));

    harness.resize(size.width, size.height);
    let layout = *harness.widget().switch_layout();
    assert_eq!(
        (layout.left.left, layout.left.top, layout.left.right, layout.left.bottom),
        (10, 10, 140, 50)
    );
    assert_eq!(
        (layout.right.left, layout.right.top, layout.right.right, layout.right.bottom),
        (160, 10, 290, 50)
    );

    let first = harness.frame().expect("first frame paints");
    assert_eq!(cursor_rect(&first), layout.left.to_rect());

    let msg = harness.tap().expect("tap toggles");
    assert_eq!(
        msg.downcast_ref::<SwitchToggled>(),
        Some(&SwitchToggled { on: false })
    );

    let second = harness.frame().expect("tap requests a repaint");
    assert_eq!(cursor_rect(&second), layout.right.to_rect());
}

#[test]
fn test_no_repaint_without_state_change() {
    let mut harness = Harness::new(SegmentSwitch::new());
    harness.measure_and_layout(MeasureSpec::Exactly(300), MeasureSpec::Unspecified);

    assert!(harness.frame().is_some());
    assert!(harness.frame().is_none());
    assert!(harness.frame().is_none());
    assert_eq!(harness.frames_painted(), 1);

    harness.tap();
    assert!(harness.frame().is_some());
    assert_eq!(harness.frames_painted(), 2);
}

#[test]
fn test_recreate_preserves_state_not_style() {
    let styled = StyleAttributes::from_yaml("cursorColor: \"#ff0000\"\nleftText: \"on\"\n")
        .expect("valid style");
    let host = ViewState::from_bytes(b"host-scroll-position".to_vec());
    let mut harness = Harness::new(SegmentSwitch::styled(&styled)).with_host_state(host.clone());
    harness.measure_and_layout(MeasureSpec::Exactly(300), MeasureSpec::Unspecified);
    harness.tap();
    assert!(!harness.widget().is_on());

    harness.recreate(SegmentSwitch::new).expect("recreate");

    assert!(!harness.widget().is_on());
    assert_eq!(harness.host_state(), &host);
    // style comes from the new instance's construction, not the saved blob
    assert_eq!(harness.widget().cursor_color(), Color::GREEN);
    assert_eq!(harness.widget().left_label(), "left");

    let commands = harness.frame().expect("restore requests a repaint");
    assert_eq!(cursor_rect(&commands), Rect::new(160.0, 10.0, 130.0, 40.0));
}

#[test]
fn test_fresh_instance_defaults_to_on() {
    let mut harness = Harness::new(SegmentSwitch::new());
    harness.measure_and_layout(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    assert!(harness.widget().is_on());
    assert_eq!(harness.widget().bounds().size(), Size::new(140.0, 28.0));
}

#[test]
fn test_zero_width_resize_before_layout() {
    let mut harness = Harness::new(SegmentSwitch::new());
    harness.resize(0.0, 0.0);
    let commands = harness.frame().expect("initial frame");
    assert_eq!(cursor_rect(&commands), Rect::default());
}

proptest! {
    #[test]
    fn prop_recreate_roundtrip(taps in 0usize..10) {
        let mut harness = Harness::new(SegmentSwitch::new());
        harness.measure_and_layout(MeasureSpec::Exactly(300), MeasureSpec::Unspecified);
        for _ in 0..taps {
            harness.tap();
        }
        let before = harness.widget().is_on();
        harness.recreate(SegmentSwitch::new).expect("recreate");
        prop_assert_eq!(harness.widget().is_on(), before);
        prop_assert_eq!(before, taps % 2 == 0);
    }
}
