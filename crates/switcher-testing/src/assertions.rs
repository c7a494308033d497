//! Assertion helpers for widget tests.

use switcher_ui_graphics::{DrawPrimitive, Point};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every sample lies in `[min, max]`.
pub fn assert_all_within(samples: &[f32], min: f32, max: f32, msg: &str) {
    for (index, sample) in samples.iter().enumerate() {
        assert!(
            *sample >= min && *sample <= max,
            "{}: sample #{} = {} outside [{}, {}]",
            msg,
            index,
            sample,
            min,
            max
        );
    }
}

/// Assert that samples never move away from the direction of travel.
pub fn assert_monotonic(samples: &[f32], increasing: bool, msg: &str) {
    for pair in samples.windows(2) {
        let ok = if increasing {
            pair[1] >= pair[0]
        } else {
            pair[1] <= pair[0]
        };
        assert!(ok, "{}: {} -> {} breaks monotonicity", msg, pair[0], pair[1]);
    }
}

/// Center of the thumb in a painted frame.
pub fn thumb_center(primitives: &[DrawPrimitive]) -> Option<Point> {
    primitives.iter().find_map(|primitive| match primitive {
        DrawPrimitive::Circle { center, .. } => Some(*center),
        _ => None,
    })
}

/// Alpha of the transition overlay (the second pill) in a painted frame.
pub fn transition_alpha(primitives: &[DrawPrimitive]) -> Option<u8> {
    primitives
        .iter()
        .filter_map(|primitive| match primitive {
            DrawPrimitive::RoundRect { color, .. } => Some(color.alpha_u8()),
            _ => None,
        })
        .nth(1)
}
