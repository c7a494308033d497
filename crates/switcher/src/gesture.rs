//! Tap-versus-drag classification for a single touch sequence.
//!
//! The session is an explicit value owned by the widget between the down and
//! up events; nothing here touches widget state directly.

use switcher_ui_graphics::Point;

use crate::input::PointerEvent;
use crate::layout::SwitcherGeometry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    Tap,
    Drag,
}

/// Transient state for one down → move* → up sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub down_position: Point,
    pub down_global_position: Point,
    pub intent: GestureIntent,
}

/// What the widget should do once the touch sequence ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseAction {
    /// Animate to the opposite extreme.
    Toggle,
    /// Animate to whichever extreme is closer.
    Snap,
}

impl GestureSession {
    /// Opens a session. A press on the empty end opposite the thumb is a
    /// provisional tap; a press anywhere else is treated as grabbing the thumb.
    pub fn begin(event: &PointerEvent, geometry: &SwitcherGeometry, checked: bool) -> Self {
        let intent = if geometry.is_opposite_end(event.position.x, checked) {
            GestureIntent::Tap
        } else {
            GestureIntent::Drag
        };
        log::debug!(
            "gesture down at x={:.1} (checked={}): provisional {:?}",
            event.position.x,
            checked,
            intent
        );
        Self {
            down_position: event.position,
            down_global_position: event.global_position,
            intent,
        }
    }

    /// Applies a move event. Returns the new clamped progress when horizontal
    /// travel dominates, committing the session to a drag.
    ///
    /// Travel is measured from the down point on every move, not from the
    /// previous move.
    pub fn drag(
        &mut self,
        event: &PointerEvent,
        geometry: &SwitcherGeometry,
        progress: f32,
        damping: f32,
    ) -> Option<f32> {
        let dx = self.down_global_position.x - event.global_position.x;
        let dy = self.down_global_position.y - event.global_position.y;
        if dx.abs() <= dy.abs() {
            return None;
        }
        if self.intent != GestureIntent::Drag {
            log::debug!("gesture committed to drag");
            self.intent = GestureIntent::Drag;
        }
        Some(geometry.clamp_progress(progress - dx * damping))
    }

    /// Closes the session and picks the settle animation.
    pub fn release(self) -> ReleaseAction {
        match self.intent {
            GestureIntent::Tap => ReleaseAction::Toggle,
            GestureIntent::Drag => ReleaseAction::Snap,
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
