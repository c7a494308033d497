use super::*;

use std::cell::{Cell, RefCell};

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(clock: &FrameClock, start: u64, limit: usize) -> u64 {
    let mut time = start;
    for _ in 0..limit {
        if !clock.has_pending_callbacks() {
            break;
        }
        clock.drain_frame_callbacks(time);
        time += FRAME_NANOS;
    }
    time
}

#[test]
fn linear_tween_interpolates_and_lands_on_target() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(0.0f32, clock.clone());
    let samples = Rc::new(RefCell::new(Vec::new()));
    {
        let samples = Rc::clone(&samples);
        animatable.set_update_listener(move |value| samples.borrow_mut().push(*value));
    }

    animatable.animate_to(80.0, AnimationSpec::linear(200));
    assert!(animatable.is_running());

    // First frame latches the start time.
    clock.drain_frame_callbacks(1_000_000_000);
    assert_eq!(animatable.value(), 0.0);

    clock.drain_frame_callbacks(1_000_000_000 + 100_000_000);
    assert!((animatable.value() - 40.0).abs() < 1e-3);

    run_frames(&clock, 1_000_000_000 + 200_000_000, 8);
    assert_eq!(animatable.value(), 80.0);
    assert!(!animatable.is_running());
    assert_eq!(samples.borrow().last().copied(), Some(80.0));
}

#[test]
fn new_animation_cancels_the_running_one() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(0.0f32, clock.clone());

    animatable.animate_to(80.0, AnimationSpec::linear(200));
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(50_000_000);
    let midway = animatable.value();
    assert!(midway > 0.0 && midway < 80.0);

    animatable.animate_to(0.0, AnimationSpec::linear(100));
    assert_eq!(clock.pending_callback_count(), 1);

    run_frames(&clock, 60_000_000, 32);
    assert_eq!(animatable.value(), 0.0);
    assert_eq!(animatable.target(), 0.0);
}

#[test]
fn snap_to_cancels_and_jumps_without_notifying() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(0.0f32, clock.clone());
    let notified = Rc::new(Cell::new(0));
    {
        let notified = Rc::clone(&notified);
        animatable.set_update_listener(move |_| notified.set(notified.get() + 1));
    }

    animatable.animate_to(80.0, AnimationSpec::linear(200));
    animatable.snap_to(25.0);

    assert!(!animatable.is_running());
    assert!(!clock.has_pending_callbacks());
    assert_eq!(animatable.value(), 25.0);
    assert_eq!(notified.get(), 0);
}

#[test]
fn stop_freezes_current_value() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(0.0f32, clock.clone());
    animatable.animate_to(100.0, AnimationSpec::linear(100));
    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(30_000_000);
    animatable.stop();

    let frozen = animatable.value();
    assert!((frozen - 30.0).abs() < 1e-3);
    assert_eq!(animatable.target(), frozen);
    assert!(!clock.has_pending_callbacks());
}

#[test]
fn delay_holds_the_start_value() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(0.0f64, clock.clone());
    animatable.animate_to(1.0, AnimationSpec::linear(100).with_delay(50));

    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(40_000_000);
    assert_eq!(animatable.value(), 0.0);

    clock.drain_frame_callbacks(100_000_000);
    assert!((animatable.value() - 0.5).abs() < 1e-6);
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let clock = FrameClock::new();
    let mut animatable = Animatable::new(10.0f32, clock.clone());
    animatable.animate_to(0.0, AnimationSpec::linear(0));
    clock.drain_frame_callbacks(5);
    assert_eq!(animatable.value(), 0.0);
    assert!(!animatable.is_running());
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_curves_hit_their_endpoints_and_stay_monotonic() {
    let easings = [
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {:?}", easing);
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {:?}", easing);
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(value + 1e-4 >= previous, "{:?} regressed at {}", easing, step);
            previous = value;
        }
    }
}

#[test]
fn ease_in_out_is_symmetric_at_midpoint() {
    assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 0.01);
}
