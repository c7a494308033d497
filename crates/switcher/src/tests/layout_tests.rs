use super::*;

#[test]
fn unconstrained_measure_uses_defaults() {
    let geometry = SwitcherGeometry::measure(Constraints::unbounded(), 10.0);
    assert_eq!(geometry.size, Size::new(180.0, 100.0));
    assert_eq!(geometry.thumb_radius, 50.0);
    assert_eq!(geometry.track_width, 60.0);
    assert_eq!(geometry.background, Rect::new(0.0, 0.0, 160.0, 100.0));
}

#[test]
fn exact_constraints_drive_geometry() {
    let geometry = SwitcherGeometry::measure(Constraints::tight(225.0, 60.0), 10.0);
    assert_eq!(geometry.size, Size::new(225.0, 60.0));
    assert_eq!(geometry.thumb_radius, 30.0);
    assert_eq!(geometry.track_width, 80.0);
    assert_eq!(geometry.background, Rect::new(0.0, 0.0, 140.0, 60.0));
}

#[test]
fn loose_axis_falls_back_independently() {
    let constraints = Constraints {
        min_height: 40.0,
        max_height: 40.0,
        ..Constraints::loose(1_000.0, 1_000.0)
    };
    let geometry = SwitcherGeometry::measure(constraints, 10.0);
    assert_eq!(geometry.size, Size::new(180.0, 40.0));
    assert_eq!(geometry.thumb_radius, 20.0);
}

#[test]
fn narrow_width_never_yields_negative_track() {
    let geometry = SwitcherGeometry::measure(Constraints::tight(30.0, 20.0), 4.0);
    assert_eq!(geometry.track_width, 0.0);
    assert_eq!(geometry.clamp_progress(5.0), 0.0);
}

#[test]
fn initial_geometry_matches_stock_defaults() {
    let geometry = SwitcherGeometry::initial(10.0);
    assert_eq!(geometry.thumb_radius, 50.0);
    assert_eq!(geometry.track_width, 80.0);
    assert_eq!(geometry.thumb_paint_radius(), 40.0);
}

#[test]
fn snap_target_splits_at_midpoint() {
    let geometry = SwitcherGeometry::initial(10.0);
    assert_eq!(geometry.snap_target(30.0), 0.0);
    assert_eq!(geometry.snap_target(39.9), 0.0);
    assert_eq!(geometry.snap_target(40.0), 80.0);
    assert_eq!(geometry.snap_target(50.0), 80.0);
}

#[test]
fn opposite_end_depends_on_state() {
    let geometry = SwitcherGeometry::initial(10.0);
    assert!(geometry.is_opposite_end(150.0, false));
    assert!(!geometry.is_opposite_end(60.0, false));
    assert!(geometry.is_opposite_end(20.0, true));
    assert!(!geometry.is_opposite_end(150.0, true));
}

#[test]
fn thumb_center_follows_progress() {
    let geometry = SwitcherGeometry::initial(10.0);
    assert_eq!(geometry.thumb_center(0.0), Point::new(50.0, 50.0));
    assert_eq!(geometry.thumb_center(80.0), Point::new(130.0, 50.0));
}
