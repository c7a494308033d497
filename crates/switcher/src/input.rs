//! Pointer input delivered by the host.

use std::cell::Cell;
use std::rc::Rc;

use switcher_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event delivered by the host for the single active pointer.
///
/// `position` is relative to the widget's top-left corner; `global_position`
/// is in screen space and is what drag distances are measured in, so a
/// widget that scrolls under the finger still reports true finger travel.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub global_position: Point,
    /// Shared via Rc<Cell> so consumption is visible to every copy.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            kind,
            position,
            global_position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Event for a widget placed at the screen origin.
    pub fn local(kind: PointerEventKind, position: Point) -> Self {
        Self::new(kind, position, position)
    }

    /// Mark this event as handled so enclosing containers skip it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
