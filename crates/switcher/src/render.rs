//! Painting. Reads progress and geometry, never writes them.

use switcher_ui_graphics::{DrawScope, RoundedCornerShape};

use crate::config::SwitcherConfig;
use crate::layout::SwitcherGeometry;

/// Alpha of the transition tint: 0 when off, 255 when fully on.
pub fn transition_alpha(progress: f32, track_width: f32) -> u8 {
    if track_width <= 0.0 {
        return 0;
    }
    ((progress / track_width).clamp(0.0, 1.0) * 255.0) as u8
}

/// Paints background pill, transition cross-fade, then the thumb.
pub fn paint(
    scope: &mut dyn DrawScope,
    geometry: &SwitcherGeometry,
    config: &SwitcherConfig,
    progress: f32,
) {
    let background = geometry.background;
    let radii = RoundedCornerShape::uniform(geometry.thumb_radius)
        .resolve(background.width, background.height);

    scope.draw_round_rect(background, radii, config.background_color);

    let alpha = transition_alpha(progress, geometry.track_width);
    scope.draw_round_rect(
        background,
        radii,
        config.transition_color.with_alpha_u8(alpha),
    );

    scope.draw_circle(
        geometry.thumb_center(progress),
        geometry.thumb_paint_radius(),
        config.thumb_color,
        config.thumb_shadow,
    );
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
