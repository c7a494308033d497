//! The toggle switch widget.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use switcher_animation::{Animatable, AnimationSpec, FrameClock};
use switcher_ui_graphics::{DrawScope, Size};
use switcher_ui_layout::Constraints;

use crate::config::{ConfigError, SwitcherAttributes, SwitcherConfig};
use crate::gesture::{GestureSession, ReleaseAction};
use crate::input::{PointerEvent, PointerEventKind};
use crate::layout::SwitcherGeometry;
use crate::render;

/// Coarse visual state derived from progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchState {
    Off,
    Transitioning,
    On,
}

type CheckedChangeListener = Box<dyn FnMut(bool)>;

/// State reachable from animation frame callbacks.
struct SwitcherShared {
    invalidator: RefCell<Option<Rc<dyn Fn()>>>,
    on_checked_change: RefCell<Option<CheckedChangeListener>>,
    track_width: Cell<f32>,
    settled_checked: Cell<bool>,
}

impl SwitcherShared {
    fn invalidate(&self) {
        let invalidator = self.invalidator.borrow().clone();
        if let Some(invalidator) = invalidator {
            invalidator();
        }
    }

    /// Runs after every animation frame and programmatic jump. Reports a
    /// checked change once the thumb rests on an extreme.
    fn progress_updated(&self, progress: f32) {
        self.invalidate();
        let checked = if progress == self.track_width.get() {
            true
        } else if progress == 0.0 {
            false
        } else {
            return;
        };
        if self.settled_checked.replace(checked) != checked {
            log::debug!("switcher settled: checked={}", checked);
            if let Some(listener) = self.on_checked_change.borrow_mut().as_mut() {
                listener(checked);
            }
        }
    }
}

/// An on/off switch with a draggable thumb.
///
/// The widget is a plain state object: the host forwards layout
/// constraints, pointer events and draw calls to it, drives the
/// [`FrameClock`] it was built with, and redraws when the invalidator fires.
pub struct Switcher {
    config: SwitcherConfig,
    geometry: SwitcherGeometry,
    pending_geometry: Option<SwitcherGeometry>,
    measured: bool,
    warned_unmeasured: Cell<bool>,
    progress: Animatable<f32>,
    session: Option<GestureSession>,
    shared: Rc<SwitcherShared>,
}

impl Switcher {
    pub fn new(config: SwitcherConfig, clock: FrameClock) -> Self {
        let geometry = SwitcherGeometry::initial(config.indicator_margin);
        let shared = Rc::new(SwitcherShared {
            invalidator: RefCell::new(None),
            on_checked_change: RefCell::new(None),
            track_width: Cell::new(geometry.track_width),
            settled_checked: Cell::new(false),
        });
        let mut progress = Animatable::new(0.0f32, clock);
        {
            let shared = Rc::clone(&shared);
            progress.set_update_listener(move |value| shared.progress_updated(*value));
        }
        Self {
            config,
            geometry,
            pending_geometry: None,
            measured: false,
            warned_unmeasured: Cell::new(false),
            progress,
            session: None,
            shared,
        }
    }

    pub fn from_attributes(
        attributes: &SwitcherAttributes,
        clock: FrameClock,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(SwitcherConfig::from_attributes(attributes)?, clock))
    }

    /// Callback invoked whenever the widget needs to be redrawn.
    pub fn set_invalidator(&mut self, invalidator: impl Fn() + 'static) {
        *self.shared.invalidator.borrow_mut() = Some(Rc::new(invalidator));
    }

    /// Listener for the checked state, reported when the thumb comes to rest.
    pub fn set_on_checked_change(&mut self, listener: impl FnMut(bool) + 'static) {
        *self.shared.on_checked_change.borrow_mut() = Some(Box::new(listener));
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn geometry(&self) -> &SwitcherGeometry {
        &self.geometry
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn track_width(&self) -> f32 {
        self.geometry.track_width
    }

    pub fn is_checked(&self) -> bool {
        self.progress() == self.geometry.track_width
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_running()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn state(&self) -> SwitchState {
        let progress = self.progress();
        if progress == self.geometry.track_width {
            SwitchState::On
        } else if progress == 0.0 {
            SwitchState::Off
        } else {
            SwitchState::Transitioning
        }
    }

    /// Animate to on.
    pub fn check(&mut self) {
        self.animate_progress(self.geometry.track_width, self.config.toggle_spec());
    }

    /// Animate to off.
    pub fn close(&mut self) {
        self.animate_progress(0.0, self.config.toggle_spec());
    }

    /// Animate to the opposite of the current checked state. Anything short
    /// of fully on counts as off, so a half-finished animation toward on is
    /// restarted toward on.
    pub fn toggle(&mut self) {
        if self.is_checked() {
            self.close();
        } else {
            self.check();
        }
    }

    pub fn set_checked(&mut self, checked: bool, animate: bool) {
        match (checked, animate) {
            (true, true) => self.check(),
            (false, true) => self.close(),
            (checked, false) => {
                let target = if checked { self.geometry.track_width } else { 0.0 };
                self.progress.snap_to(target);
                self.shared.progress_updated(target);
            }
        }
    }

    fn snap_to_nearest(&mut self) {
        let target = self.geometry.snap_target(self.progress());
        self.animate_progress(target, self.config.snap_spec());
    }

    fn animate_progress(&mut self, target: f32, spec: AnimationSpec) {
        log::debug!(
            "switcher animating {:.1} -> {:.1} over {}ms",
            self.progress(),
            target,
            spec.duration_millis
        );
        self.progress.animate_to(target, spec);
    }

    /// Layout pass. Returns the measured size.
    ///
    /// Geometry produced while a gesture is in progress is held back and
    /// applied when the gesture ends.
    pub fn measure(&mut self, constraints: Constraints) -> Size {
        let geometry = SwitcherGeometry::measure(constraints, self.config.indicator_margin);
        self.measured = true;
        if self.session.is_some() {
            log::debug!("deferring relayout until the current gesture ends");
            self.pending_geometry = Some(geometry);
        } else {
            self.apply_geometry(geometry);
        }
        geometry.size
    }

    fn apply_geometry(&mut self, geometry: SwitcherGeometry) {
        let previous = std::mem::replace(&mut self.geometry, geometry);
        self.shared.track_width.set(geometry.track_width);
        if previous.track_width == geometry.track_width {
            return;
        }

        // Keep the thumb at the same relative position on the new track.
        let rescale = |value: f32| {
            if previous.track_width > 0.0 {
                geometry.clamp_progress(value / previous.track_width * geometry.track_width)
            } else {
                geometry.track_width
            }
        };
        let running = self.progress.is_running();
        let target = rescale(self.progress.target());
        let value = rescale(self.progress());
        self.progress.snap_to(value);
        if running {
            let spec = self.progress.spec();
            self.progress.animate_to(target, spec);
        } else {
            self.shared.progress_updated(value);
        }
        self.shared.invalidate();
    }

    /// Feeds one pointer event. Consumes the down event and horizontal moves;
    /// vertical moves are left for enclosing scrollers.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                if self.session.is_some() {
                    log::debug!("down without up; restarting gesture");
                }
                self.session = Some(GestureSession::begin(
                    event,
                    &self.geometry,
                    self.is_checked(),
                ));
                event.consume();
            }
            PointerEventKind::Move => {
                let progress = self.progress();
                let Some(session) = self.session.as_mut() else {
                    log::debug!("ignoring move without a preceding down");
                    return;
                };
                if let Some(next) =
                    session.drag(event, &self.geometry, progress, self.config.drag_damping)
                {
                    self.progress.snap_to(next);
                    event.consume();
                }
                self.shared.invalidate();
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let Some(session) = self.session.take() else {
                    log::debug!("ignoring {:?} without a preceding down", event.kind);
                    return;
                };
                if let Some(geometry) = self.pending_geometry.take() {
                    self.apply_geometry(geometry);
                }
                let action = if event.kind == PointerEventKind::Cancel {
                    ReleaseAction::Snap
                } else {
                    session.release()
                };
                match action {
                    ReleaseAction::Toggle => self.toggle(),
                    ReleaseAction::Snap => self.snap_to_nearest(),
                }
                self.shared.invalidate();
            }
        }
    }

    /// Paints the widget. Uses default geometry if no layout pass has run yet.
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        if !self.measured && !self.warned_unmeasured.replace(true) {
            log::warn!("switcher drawn before measure; using default geometry");
        }
        render::paint(scope, &self.geometry, &self.config, self.progress());
    }
}

#[cfg(test)]
#[path = "tests/switcher_tests.rs"]
mod tests;
