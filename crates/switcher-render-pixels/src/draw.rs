use switcher_ui_graphics::{Color, CornerRadii, DrawPrimitive, Point, Rect, Shadow};

#[derive(Clone, Copy)]
struct PixelBounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

/// Pixel span covering `rect`, clipped to the frame.
fn pixel_bounds(rect: Rect, width: u32, height: u32) -> Option<PixelBounds> {
    let min_x = rect.x.floor().max(0.0);
    let min_y = rect.y.floor().max(0.0);
    let max_x = rect.right().ceil().min(width as f32);
    let max_y = rect.bottom().ceil().min(height as f32);
    if max_x <= min_x || max_y <= min_y {
        return None;
    }
    Some(PixelBounds {
        min_x: min_x as u32,
        min_y: min_y as u32,
        max_x: max_x as u32,
        max_y: max_y as u32,
    })
}

pub fn point_in_resolved_rounded_rect(x: f32, y: f32, rect: Rect, radii: &CornerRadii) -> bool {
    if !rect.contains(x, y) {
        return false;
    }
    // (radius, corner center, is the point in that corner's quadrant)
    let corners = [
        (
            radii.top_left,
            Point::new(rect.x + radii.top_left, rect.y + radii.top_left),
            x < rect.x + radii.top_left && y < rect.y + radii.top_left,
        ),
        (
            radii.top_right,
            Point::new(rect.right() - radii.top_right, rect.y + radii.top_right),
            x > rect.right() - radii.top_right && y < rect.y + radii.top_right,
        ),
        (
            radii.bottom_right,
            Point::new(
                rect.right() - radii.bottom_right,
                rect.bottom() - radii.bottom_right,
            ),
            x > rect.right() - radii.bottom_right && y > rect.bottom() - radii.bottom_right,
        ),
        (
            radii.bottom_left,
            Point::new(rect.x + radii.bottom_left, rect.bottom() - radii.bottom_left),
            x < rect.x + radii.bottom_left && y > rect.bottom() - radii.bottom_left,
        ),
    ];
    corners.iter().all(|(radius, center, in_corner)| {
        *radius <= 0.0
            || !*in_corner
            || (x - center.x).powi(2) + (y - center.y).powi(2) <= radius.powi(2)
    })
}

pub(crate) fn color_to_rgba8(color: Color) -> [u8; 4] {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    [
        channel(color.0),
        channel(color.1),
        channel(color.2),
        channel(color.3),
    ]
}

fn blend(frame: &mut [u8], width: u32, px: u32, py: u32, color: Color, coverage: f32) {
    let alpha = (color.3 * coverage).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let idx = ((py * width + px) * 4) as usize;
    let pixel = &mut frame[idx..idx + 4];
    let source = [color.0, color.1, color.2];
    for (channel, src) in pixel.iter_mut().zip(source) {
        let dst = *channel as f32 / 255.0;
        let out = src.clamp(0.0, 1.0) * alpha + dst * (1.0 - alpha);
        *channel = (out * 255.0).round() as u8;
    }
    let dst_alpha = pixel[3] as f32 / 255.0;
    pixel[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8;
}

fn fill_round_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    radii: &CornerRadii,
    color: Color,
) {
    let Some(bounds) = pixel_bounds(rect, width, height) else {
        return;
    };
    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            if point_in_resolved_rounded_rect(cx, cy, rect, radii) {
                blend(frame, width, px, py, color, 1.0);
            }
        }
    }
}

/// Linear falloff from the shape edge out to `blur_radius`.
fn fill_circle_shadow(
    frame: &mut [u8],
    width: u32,
    height: u32,
    center: Point,
    radius: f32,
    shadow: Shadow,
) {
    let blur = shadow.blur_radius.max(0.0);
    if blur == 0.0 {
        return;
    }
    let center = Point::new(center.x + shadow.offset.x, center.y + shadow.offset.y);
    let outer = radius + blur;
    let extent = Rect::new(center.x - outer, center.y - outer, outer * 2.0, outer * 2.0);
    let Some(bounds) = pixel_bounds(extent, width, height) else {
        return;
    };
    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let dx = px as f32 + 0.5 - center.x;
            let dy = py as f32 + 0.5 - center.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= radius || distance >= outer {
                continue;
            }
            let coverage = 1.0 - (distance - radius) / blur;
            blend(frame, width, px, py, shadow.color, coverage);
        }
    }
}

fn fill_circle(
    frame: &mut [u8],
    width: u32,
    height: u32,
    center: Point,
    radius: f32,
    color: Color,
) {
    let extent = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
    let Some(bounds) = pixel_bounds(extent, width, height) else {
        return;
    };
    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let dx = px as f32 + 0.5 - center.x;
            let dy = py as f32 + 0.5 - center.y;
            if dx * dx + dy * dy <= radius * radius {
                blend(frame, width, px, py, color, 1.0);
            }
        }
    }
}

pub fn draw_primitive(frame: &mut [u8], width: u32, height: u32, primitive: &DrawPrimitive) {
    match primitive {
        DrawPrimitive::RoundRect { rect, radii, color } => {
            fill_round_rect(frame, width, height, *rect, radii, *color)
        }
        DrawPrimitive::Circle {
            center,
            radius,
            color,
            shadow,
        } => {
            if let Some(shadow) = shadow {
                fill_circle_shadow(frame, width, height, *center, *radius, *shadow);
            }
            fill_circle(frame, width, height, *center, *radius, *color);
        }
    }
}
