//! Host-driven frame clock.
//!
//! Callbacks are one-shot: an animation that needs another frame registers
//! again from inside its callback, and that registration runs on the next
//! drain, never the current one.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_time::Instant;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

/// Asks the host to deliver a frame (e.g. request a vsync or a redraw).
pub trait FrameScheduler {
    fn schedule_frame(&self);
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: FrameCallback,
}

struct FrameClockInner {
    next_id: Cell<FrameCallbackId>,
    callbacks: RefCell<SmallVec<[FrameCallbackEntry; 4]>>,
    /// Ids taken by the drain in progress that have not run yet.
    draining: RefCell<SmallVec<[FrameCallbackId; 4]>>,
    scheduler: RefCell<Option<Rc<dyn FrameScheduler>>>,
    epoch: Instant,
}

impl FrameClockInner {
    fn cancel(&self, id: FrameCallbackId) {
        let mut callbacks = self.callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
            return;
        }
        drop(callbacks);
        self.take_draining(id);
    }

    /// Removes `id` from the in-progress drain. False if it was cancelled.
    fn take_draining(&self, id: FrameCallbackId) -> bool {
        let mut draining = self.draining.borrow_mut();
        match draining.iter().position(|pending| *pending == id) {
            Some(index) => {
                draining.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FrameClockInner {
                next_id: Cell::new(1),
                callbacks: RefCell::new(SmallVec::new()),
                draining: RefCell::new(SmallVec::new()),
                scheduler: RefCell::new(None),
                epoch: Instant::now(),
            }),
        }
    }

    pub fn with_scheduler(scheduler: Rc<dyn FrameScheduler>) -> Self {
        let clock = Self::new();
        clock.set_scheduler(Some(scheduler));
        clock
    }

    pub fn set_scheduler(&self, scheduler: Option<Rc<dyn FrameScheduler>>) {
        *self.inner.scheduler.borrow_mut() = scheduler;
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.callbacks.borrow_mut().push(FrameCallbackEntry {
            id,
            callback: Box::new(callback),
        });
        let scheduler = self.inner.scheduler.borrow().clone();
        if let Some(scheduler) = scheduler {
            scheduler.schedule_frame();
        }
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }

    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.callbacks.borrow().is_empty()
    }

    pub fn pending_callback_count(&self) -> usize {
        self.inner.callbacks.borrow().len()
    }

    /// Runs every callback registered before this call with the given frame time.
    ///
    /// A callback cancelled by an earlier callback of the same frame is skipped.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let pending: SmallVec<[FrameCallbackEntry; 4]> =
            std::mem::take(&mut *self.inner.callbacks.borrow_mut());
        log::trace!(
            "frame at {}ns: running {} callback(s)",
            frame_time_nanos,
            pending.len()
        );
        self.inner
            .draining
            .borrow_mut()
            .extend(pending.iter().map(|entry| entry.id));
        for entry in pending {
            if self.inner.take_draining(entry.id) {
                (entry.callback)(frame_time_nanos);
            } else {
                log::trace!("skipping frame callback {} cancelled mid-frame", entry.id);
            }
        }
    }

    /// Maps a wall-clock instant onto this clock's timeline.
    pub fn frame_time_nanos(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.inner.epoch).as_nanos() as u64
    }

    /// Drains callbacks using the current wall-clock time.
    pub fn drain_now(&self) {
        self.drain_frame_callbacks(self.frame_time_nanos(Instant::now()));
    }
}

/// Handle to a registered frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.cancel_in_place();
    }

    fn cancel_in_place(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                clock.cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_in_place();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
