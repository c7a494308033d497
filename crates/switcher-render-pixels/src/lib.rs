//! Software rasterizer for Switcher draw primitives.
//!
//! Paints into a caller-owned RGBA8 frame, row-major, 4 bytes per pixel.

mod draw;

use switcher_ui_graphics::{Color, DrawPrimitive};
use thiserror::Error;

pub use draw::{draw_primitive, point_in_resolved_rounded_rect};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelsRendererError {
    #[error("frame holds {actual} bytes but {width}x{height} RGBA needs {expected}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub struct PixelsRenderer {
    clear_color: Color,
}

impl Default for PixelsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsRenderer {
    pub fn new() -> Self {
        Self {
            clear_color: Color::TRANSPARENT,
        }
    }

    pub fn with_clear_color(clear_color: Color) -> Self {
        Self { clear_color }
    }

    /// Clears the frame and paints `primitives` in order with source-over blending.
    pub fn draw(
        &self,
        primitives: &[DrawPrimitive],
        frame: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), PixelsRendererError> {
        let expected = width as usize * height as usize * 4;
        if frame.len() != expected {
            return Err(PixelsRendererError::FrameSize {
                width,
                height,
                expected,
                actual: frame.len(),
            });
        }

        let clear = draw::color_to_rgba8(self.clear_color);
        for chunk in frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&clear);
        }
        for primitive in primitives {
            draw_primitive(frame, width, height, primitive);
        }
        log::trace!(
            "rasterized {} primitive(s) into {}x{}",
            primitives.len(),
            width,
            height
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/pixels_tests.rs"]
mod tests;
