use super::*;

use crate::input::PointerEventKind;

fn geometry() -> SwitcherGeometry {
    SwitcherGeometry::initial(10.0)
}

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::local(kind, Point::new(x, y))
}

fn press(x: f32, checked: bool) -> GestureSession {
    GestureSession::begin(&event(PointerEventKind::Down, x, 50.0), &geometry(), checked)
}

fn drag_to(session: &mut GestureSession, x: f32, progress: f32) -> Option<f32> {
    session.drag(
        &event(PointerEventKind::Move, x, 50.0),
        &geometry(),
        progress,
        0.125,
    )
}

#[test]
fn press_on_far_end_of_unchecked_switch_is_a_tap() {
    let session = press(150.0, false);
    assert_eq!(session.intent, GestureIntent::Tap);
    assert_eq!(session.release(), ReleaseAction::Toggle);
}

#[test]
fn press_on_near_end_of_checked_switch_is_a_tap() {
    let session = press(10.0, true);
    assert_eq!(session.intent, GestureIntent::Tap);
}

#[test]
fn press_on_thumb_is_a_provisional_drag() {
    let session = press(50.0, false);
    assert_eq!(session.intent, GestureIntent::Drag);
    assert_eq!(session.release(), ReleaseAction::Snap);
}

#[test]
fn horizontal_move_adjusts_progress_with_damping() {
    let mut session = press(150.0, false);
    let progress = drag_to(&mut session, 550.0, 0.0);
    assert_eq!(progress, Some(50.0));
    assert_eq!(session.intent, GestureIntent::Drag);
}

#[test]
fn vertical_move_is_ignored_and_keeps_tap_intent() {
    let mut session = press(150.0, false);
    let progress = session.drag(
        &event(PointerEventKind::Move, 160.0, 90.0),
        &geometry(),
        0.0,
        0.125,
    );
    assert_eq!(progress, None);
    assert_eq!(session.intent, GestureIntent::Tap);
}

#[test]
fn drag_is_clamped_to_track() {
    let mut session = press(60.0, false);
    let right = drag_to(&mut session, 2_000.0, 0.0);
    assert_eq!(right, Some(80.0));
    let left = drag_to(&mut session, -2_000.0, 40.0);
    assert_eq!(left, Some(0.0));
}

#[test]
fn deltas_use_global_coordinates() {
    let down = PointerEvent::new(
        PointerEventKind::Down,
        Point::new(60.0, 50.0),
        Point::new(360.0, 450.0),
    );
    let mut session = GestureSession::begin(&down, &geometry(), false);
    // Local position stays put (e.g. the widget scrolled with the finger).
    let moved = PointerEvent::new(
        PointerEventKind::Move,
        Point::new(60.0, 50.0),
        Point::new(520.0, 450.0),
    );
    assert_eq!(session.drag(&moved, &geometry(), 0.0, 0.125), Some(20.0));
}
