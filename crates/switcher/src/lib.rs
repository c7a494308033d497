//! An animated on/off toggle switch.
//!
//! [`Switcher`] turns taps into discrete toggles and horizontal drags into a
//! continuously sliding thumb, settling on either extreme with a short
//! linear animation. Hosts supply layout [`Constraints`], [`PointerEvent`]s,
//! frame ticks through a [`FrameClock`], and a [`DrawScope`] to paint into.

mod config;
mod gesture;
mod input;
mod layout;
mod render;
mod switcher;

pub use config::*;
pub use gesture::{GestureIntent, GestureSession, ReleaseAction};
pub use input::{PointerEvent, PointerEventKind};
pub use layout::{SwitcherGeometry, DEFAULT_SIZE};
pub use render::{paint, transition_alpha};
pub use switcher::{SwitchState, Switcher};

pub use switcher_animation::{AnimationSpec, Easing, FrameClock, FrameScheduler};
pub use switcher_ui_graphics::{
    Color, DrawPrimitive, DrawScope, DrawScopeDefault, Point, Rect, Shadow, Size,
};
pub use switcher_ui_layout::Constraints;
