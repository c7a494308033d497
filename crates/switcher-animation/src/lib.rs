//! Frame clock and time-based animations for Switcher
//!
//! The host drives a [`FrameClock`] once per display frame; animations
//! register one-shot callbacks on it and re-register until they settle.

mod animation;
mod frame_clock;

pub use animation::*;
pub use frame_clock::*;
