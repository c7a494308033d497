//! Headless harness that owns a switcher, a virtual frame clock and a
//! simulated pointer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use switcher::{PointerEvent, PointerEventKind, Switcher, SwitcherConfig};
use switcher_animation::FrameClock;
use switcher_ui_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault, Point, Size};
use switcher_ui_layout::Constraints;

/// Display refresh interval used when advancing virtual time (~60 FPS).
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const MAX_IDLE_FRAMES: usize = 600;

pub struct SwitcherTestRule {
    clock: FrameClock,
    switcher: Switcher,
    time_nanos: u64,
    origin: Point,
    pointer: Option<Point>,
    frames: usize,
    redraws: Rc<Cell<usize>>,
    samples: Vec<f32>,
    checked_changes: Rc<RefCell<Vec<bool>>>,
}

impl Default for SwitcherTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitcherTestRule {
    pub fn new() -> Self {
        Self::with_config(SwitcherConfig::default())
    }

    pub fn with_config(config: SwitcherConfig) -> Self {
        let clock = FrameClock::new();
        let mut switcher = Switcher::new(config, clock.clone());
        let redraws = Rc::new(Cell::new(0));
        let checked_changes = Rc::new(RefCell::new(Vec::new()));
        {
            let redraws = Rc::clone(&redraws);
            switcher.set_invalidator(move || redraws.set(redraws.get() + 1));
        }
        {
            let checked_changes = Rc::clone(&checked_changes);
            switcher
                .set_on_checked_change(move |checked| checked_changes.borrow_mut().push(checked));
        }
        Self {
            clock,
            switcher,
            time_nanos: 0,
            origin: Point::ZERO,
            pointer: None,
            frames: 0,
            redraws,
            samples: Vec::new(),
            checked_changes,
        }
    }

    pub fn switcher(&self) -> &Switcher {
        &self.switcher
    }

    pub fn switcher_mut(&mut self) -> &mut Switcher {
        &mut self.switcher
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn progress(&self) -> f32 {
        self.switcher.progress()
    }

    /// Places the widget at `origin` in screen space; pointer positions
    /// passed to this rule stay widget-local.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn measure(&mut self, constraints: Constraints) -> Size {
        self.switcher.measure(constraints)
    }

    pub fn measure_exact(&mut self, width: f32, height: f32) -> Size {
        self.measure(Constraints::tight(width, height))
    }

    fn dispatch(&mut self, kind: PointerEventKind, position: Point) -> bool {
        let global = Point::new(self.origin.x + position.x, self.origin.y + position.y);
        let event = PointerEvent::new(kind, position, global);
        self.switcher.on_pointer_event(&event);
        event.is_consumed()
    }

    /// Presses at a widget-local position. Returns whether the event was consumed.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Some(Point::new(x, y));
        self.dispatch(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Some(Point::new(x, y));
        self.dispatch(PointerEventKind::Move, Point::new(x, y))
    }

    /// Lifts the pointer where it last was.
    pub fn release(&mut self) {
        let position = self.pointer.take().unwrap_or(Point::ZERO);
        self.dispatch(PointerEventKind::Up, position);
    }

    pub fn cancel(&mut self) {
        let position = self.pointer.take().unwrap_or(Point::ZERO);
        self.dispatch(PointerEventKind::Cancel, position);
    }

    pub fn tap(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.release();
    }

    /// Press at `(x, y)`, one move by `(dx, dy)`, release.
    pub fn drag_by(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.press(x, y);
        self.move_to(x + dx, y + dy);
        self.release();
    }

    pub fn now_millis(&self) -> u64 {
        self.time_nanos / 1_000_000
    }

    fn run_frame(&mut self) {
        if !self.clock.has_pending_callbacks() {
            return;
        }
        self.clock.drain_frame_callbacks(self.time_nanos);
        self.frames += 1;
        self.samples.push(self.switcher.progress());
    }

    /// Delivers a frame now, then one per refresh interval until `millis`
    /// of virtual time have passed. The last frame lands exactly on the end.
    pub fn advance_time_by(&mut self, millis: u64) {
        let end = self.time_nanos + millis * 1_000_000;
        self.run_frame();
        while self.time_nanos < end {
            self.time_nanos = (self.time_nanos + FRAME_INTERVAL_NANOS).min(end);
            self.run_frame();
        }
    }

    /// Runs frames until no animation is pending. Returns elapsed virtual milliseconds.
    pub fn advance_until_idle(&mut self) -> u64 {
        let start = self.time_nanos;
        self.run_frame();
        let mut guard = 0;
        while self.clock.has_pending_callbacks() {
            guard += 1;
            assert!(
                guard <= MAX_IDLE_FRAMES,
                "switcher still animating after {} frames",
                MAX_IDLE_FRAMES
            );
            self.time_nanos += FRAME_INTERVAL_NANOS;
            self.run_frame();
        }
        let elapsed = (self.time_nanos - start) / 1_000_000;
        log::debug!("switcher idle after {}ms of virtual time", elapsed);
        elapsed
    }

    pub fn render(&self) -> Vec<DrawPrimitive> {
        let mut scope = DrawScopeDefault::new(self.switcher.geometry().size);
        self.switcher.draw(&mut scope);
        scope.into_primitives()
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }

    /// Progress after each delivered frame, oldest first.
    pub fn progress_samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn clear_samples(&mut self) {
        self.samples.clear();
    }

    pub fn checked_changes(&self) -> Vec<bool> {
        self.checked_changes.borrow().clone()
    }
}
