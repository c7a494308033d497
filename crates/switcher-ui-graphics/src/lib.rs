//! Pure math/data for drawing & units in Switcher
//!
//! This crate contains geometry primitives, color definitions, draw
//! primitives and unit types shared by the widget and its renderers.

mod color;
mod draw;
mod geometry;
mod unit;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use unit::*;
