use super::*;

#[test]
fn tight_constraints_report_exact_axes() {
    let constraints = Constraints::tight(180.0, 100.0);
    assert!(constraints.has_tight_width());
    assert!(constraints.has_tight_height());
    assert_eq!(constraints.exact_width(), Some(180.0));
    assert_eq!(constraints.exact_height(), Some(100.0));
}

#[test]
fn loose_axis_has_no_exact_size() {
    let constraints = Constraints {
        min_height: 60.0,
        max_height: 60.0,
        ..Constraints::loose(400.0, 300.0)
    };
    assert_eq!(constraints.exact_width(), None);
    assert_eq!(constraints.exact_height(), Some(60.0));
}

#[test]
fn unbounded_constraints_have_no_exact_axis() {
    let constraints = Constraints::unbounded();
    assert_eq!(constraints.max_width, f32::INFINITY);
    assert_eq!(constraints.exact_width(), None);
    assert_eq!(constraints.exact_height(), None);
}

#[test]
fn zero_sized_loose_constraints_are_tight() {
    let constraints = Constraints::loose(0.0, 0.0);
    assert_eq!(constraints.exact_width(), Some(0.0));
    assert_eq!(constraints.exact_height(), Some(0.0));
}
