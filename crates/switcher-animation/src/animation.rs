//! Time-based animations driven by a [`FrameClock`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::frame_clock::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing curves applied to the linear time fraction of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluates a CSS-style cubic bezier (endpoints fixed at 0,0 and 1,1).
///
/// `x(t)` is monotonic for control points with x in `[0, 1]`, so the curve
/// parameter is found by bisection.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let sample = |p1: f32, p2: f32, t: f32| {
        let inv = 1.0 - t;
        3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
    };

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample(x1, x2, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x < fraction {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    sample(y1, y2, t)
}

/// Tween parameters: duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

type UpdateListener<T> = Rc<dyn Fn(&T)>;

/// A value that can be animated towards a target on a [`FrameClock`].
///
/// At most one animation runs at a time: starting a new one, snapping, or
/// stopping cancels the pending frame of the previous animation, so frames
/// of two animations never interleave.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listener: Option<UpdateListener<T>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::linear(0),
            start_time_nanos: None,
            registration: None,
            listener: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Called with the new value after every animation frame, including the last.
    pub fn set_update_listener(&mut self, listener: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Animate from the current value to `target`, replacing any running animation.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                log::debug!("animation superseded before completion");
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `value` without animating. Does not notify the update listener.
    pub fn snap_to(&mut self, value: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = value.clone();
        inner.start = value.clone();
        inner.target = value;
        inner.start_time_nanos = None;
    }

    /// Cancel the running animation, leaving the value where it is.
    pub fn stop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.target = inner.current.clone();
        inner.start = inner.current.clone();
        inner.start_time_nanos = None;
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (update, schedule_next) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = spec.delay_millis * 1_000_000;

            if elapsed_nanos < delay_nanos {
                (None, true)
            } else {
                let duration_nanos = spec.duration_millis * 1_000_000;
                let linear_progress = if duration_nanos == 0 {
                    1.0
                } else {
                    ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0)
                };

                if linear_progress >= 1.0 {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.start_time_nanos = None;
                    (Some(inner.current.clone()), false)
                } else {
                    let fraction = spec.easing.transform(linear_progress);
                    inner.current = inner.start.lerp(&inner.target, fraction);
                    (Some(inner.current.clone()), true)
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }

        if let Some(value) = update {
            log::trace!("animation frame at {}ns", frame_time_nanos);
            let listener = this.borrow().listener.clone();
            if let Some(listener) = listener {
                listener(&value);
            }
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
