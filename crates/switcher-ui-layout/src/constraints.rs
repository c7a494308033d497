//! Layout constraints system

/// Constraints used during layout measurement.
///
/// A tight axis (`min == max`) is the equivalent of an "exactly" measure
/// mode; anything else leaves the size up to the measured widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Creates constraints that put no bound on either axis.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    #[inline]
    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    #[inline]
    pub fn has_tight_height(&self) -> bool {
        self.min_height == self.max_height
    }

    /// Exact width if the width axis is tight.
    pub fn exact_width(&self) -> Option<f32> {
        self.has_tight_width().then_some(self.max_width)
    }

    /// Exact height if the height axis is tight.
    pub fn exact_height(&self) -> Option<f32> {
        self.has_tight_height().then_some(self.max_height)
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
