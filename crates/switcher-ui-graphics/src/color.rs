//! Color representation and hex parsing

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

/// Failure to parse a `#RRGGBB` / `#AARRGGBB` color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color literal must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color literal must have 6 or 8 hex digits, got {len}: {literal:?}")]
    BadLength { literal: String, len: usize },
    #[error("invalid hex digit in color literal {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Packed `0xAARRGGBB`, the layout used by most mobile toolkits.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn parse_hex(literal: &str) -> Result<Self, ColorParseError> {
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(literal.to_string()))?;
        // from_str_radix alone would also accept a leading sign.
        let value = if digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::BadDigit(literal.to_string()))
        } else {
            Err(ColorParseError::BadDigit(literal.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::from_argb(0xff00_0000 | value?)),
            8 => Ok(Self::from_argb(value?)),
            len => Err(ColorParseError::BadLength {
                literal: literal.to_string(),
                len,
            }),
        }
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Replaces alpha with an 8-bit channel value (0 = invisible, 255 = opaque).
    pub fn with_alpha_u8(&self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }

    pub fn alpha_u8(&self) -> u8 {
        (self.3.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const LIGHT_GRAY: Color = Color::from_argb(0xffcc_cccc);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
