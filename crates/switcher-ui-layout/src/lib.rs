//! Layout contracts for Switcher

mod constraints;

pub use constraints::*;
