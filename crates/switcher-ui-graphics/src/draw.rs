//! Draw primitives and the recording draw surface

use crate::color::Color;
use crate::geometry::{CornerRadii, Point, Rect, Size};

/// Soft shadow painted around a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub blur_radius: f32,
    pub offset: Point,
    pub color: Color,
}

impl Shadow {
    pub const fn new(blur_radius: f32, offset: Point, color: Color) -> Self {
        Self {
            blur_radius,
            offset,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    RoundRect {
        rect: Rect,
        radii: CornerRadii,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
        shadow: Option<Shadow>,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color);
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>);
    fn into_primitives(self) -> Vec<DrawPrimitive>
    where
        Self: Sized;
}

/// Draw surface that records primitives in paint order.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        self.primitives
            .push(DrawPrimitive::RoundRect { rect, radii, color });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, shadow: Option<Shadow>) {
        self.primitives.push(DrawPrimitive::Circle {
            center,
            radius,
            color,
            shadow,
        });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
