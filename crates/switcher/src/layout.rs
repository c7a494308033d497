//! Measurement and derived geometry.

use switcher_ui_graphics::{Point, Rect, Size};
use switcher_ui_layout::Constraints;

use crate::config::{DEFAULT_THUMB_RADIUS, DEFAULT_TRACK_WIDTH};

/// Size used on an axis the host leaves unconstrained.
pub const DEFAULT_SIZE: Size = Size::new(
    DEFAULT_TRACK_WIDTH + 2.0 * DEFAULT_THUMB_RADIUS,
    2.0 * DEFAULT_THUMB_RADIUS,
);

/// Geometry resolved by a layout pass. Never changes mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitcherGeometry {
    pub size: Size,
    pub thumb_radius: f32,
    /// Horizontal travel of the thumb; progress lives in `[0, track_width]`.
    pub track_width: f32,
    pub indicator_margin: f32,
    /// Pill behind the thumb, anchored at the origin.
    pub background: Rect,
}

impl SwitcherGeometry {
    /// Geometry used before the first layout pass.
    pub fn initial(indicator_margin: f32) -> Self {
        Self::from_parts(
            DEFAULT_SIZE,
            DEFAULT_THUMB_RADIUS,
            DEFAULT_TRACK_WIDTH,
            indicator_margin,
        )
    }

    /// Resolves the widget size and geometry for the given constraints.
    ///
    /// A tight axis is used as is; a loose one falls back to [`DEFAULT_SIZE`].
    pub fn measure(constraints: Constraints, indicator_margin: f32) -> Self {
        let width = constraints.exact_width().unwrap_or(DEFAULT_SIZE.width);
        let height = constraints.exact_height().unwrap_or(DEFAULT_SIZE.height);
        let thumb_radius = height / 2.0;
        let track_width = (width / 9.0 * 4.0 - 20.0).max(0.0);
        Self::from_parts(
            Size::new(width, height),
            thumb_radius,
            track_width,
            indicator_margin,
        )
    }

    fn from_parts(size: Size, thumb_radius: f32, track_width: f32, indicator_margin: f32) -> Self {
        Self {
            size,
            thumb_radius,
            track_width,
            indicator_margin,
            background: Rect::new(
                0.0,
                0.0,
                2.0 * thumb_radius + track_width,
                2.0 * thumb_radius,
            ),
        }
    }

    pub fn clamp_progress(&self, progress: f32) -> f32 {
        progress.clamp(0.0, self.track_width)
    }

    /// Resting extreme closest to `progress`; the exact midpoint rests on.
    pub fn snap_target(&self, progress: f32) -> f32 {
        if progress < self.track_width / 2.0 {
            0.0
        } else {
            self.track_width
        }
    }

    pub fn thumb_center(&self, progress: f32) -> Point {
        Point::new(self.thumb_radius + progress, self.thumb_radius)
    }

    pub fn thumb_paint_radius(&self) -> f32 {
        (self.thumb_radius - self.indicator_margin).max(0.0)
    }

    /// True when a press at local `x` lands on the empty end of the track
    /// opposite the thumb.
    pub fn is_opposite_end(&self, x: f32, checked: bool) -> bool {
        if checked {
            x < self.thumb_radius
        } else {
            x > self.thumb_radius + self.track_width
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
