//! Measurement and painting as seen by a host.

use switcher::{Color, Constraints, DrawPrimitive, Rect, Size, SwitcherConfig};
use switcher_testing::prelude::*;
use switcher_testing::{thumb_center, transition_alpha};

#[test]
fn unconstrained_measure_reports_default_size() {
    init_test_logging();
    let mut rule = SwitcherTestRule::new();
    let size = rule.measure(Constraints::unbounded());
    assert_eq!(size, Size::new(180.0, 100.0));
    assert_eq!(rule.switcher().track_width(), 60.0);
}

#[test]
fn loose_constraints_still_use_defaults() {
    let mut rule = SwitcherTestRule::new();
    let size = rule.measure(Constraints::loose(100.0, 40.0));
    assert_eq!(size, Size::new(180.0, 100.0));
}

#[test]
fn frames_cross_fade_while_the_thumb_slides() {
    let mut rule = SwitcherTestRule::new();
    rule.measure_exact(225.0, 100.0);

    let off = rule.render();
    assert_eq!(transition_alpha(&off), Some(0));
    assert_eq!(thumb_center(&off).map(|p| p.x), Some(50.0));

    rule.tap(200.0, 50.0);
    rule.advance_time_by(100);
    let halfway = rule.render();
    assert_eq!(transition_alpha(&halfway), Some(127));
    assert_eq!(thumb_center(&halfway).map(|p| p.x), Some(90.0));

    rule.advance_until_idle();
    let on = rule.render();
    assert_eq!(transition_alpha(&on), Some(255));
    assert_eq!(thumb_center(&on).map(|p| p.x), Some(130.0));
}

#[test]
fn rendering_is_a_pure_read() {
    let mut rule = SwitcherTestRule::new();
    rule.measure_exact(225.0, 100.0);
    rule.press(50.0, 50.0);
    rule.move_to(250.0, 50.0);
    let before = rule.progress();
    let first = rule.render();
    let second = rule.render();
    assert_eq!(first, second);
    assert_eq!(rule.progress(), before);
}

#[test]
fn background_pill_spans_thumb_and_track() {
    let mut rule = SwitcherTestRule::new();
    rule.measure_exact(225.0, 60.0);
    let frame = rule.render();
    match &frame[0] {
        DrawPrimitive::RoundRect { rect, radii, .. } => {
            assert_eq!(*rect, Rect::new(0.0, 0.0, 140.0, 60.0));
            assert_eq!(radii.top_left, 30.0);
        }
        other => panic!("expected background pill, got {:?}", other),
    }
}

#[test]
fn custom_transition_color_is_used_for_the_overlay() {
    let config = SwitcherConfig::default().with_transition_color(Color::from_rgb_u8(0, 0, 255));
    let mut rule = SwitcherTestRule::with_config(config);
    rule.switcher_mut().set_checked(true, false);
    let frame = rule.render();
    match &frame[1] {
        DrawPrimitive::RoundRect { color, .. } => {
            assert_eq!(*color, Color::from_rgb_u8(0, 0, 255));
        }
        other => panic!("expected overlay, got {:?}", other),
    }
}

#[test]
fn relayout_during_drag_waits_for_release() {
    let mut rule = SwitcherTestRule::new();
    rule.measure_exact(225.0, 100.0);
    rule.press(50.0, 50.0);
    rule.move_to(370.0, 50.0);
    assert_eq!(rule.progress(), 40.0);

    rule.measure_exact(180.0, 100.0);
    assert_eq!(rule.switcher().track_width(), 80.0);
    assert!(rule.switcher().is_gesture_active());

    rule.release();
    assert_eq!(rule.switcher().track_width(), 60.0);
    rule.advance_until_idle();
    assert_eq!(rule.progress(), 60.0);
    assert!(rule.switcher().is_checked());
}
