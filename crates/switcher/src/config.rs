//! Widget configuration and styled-attribute parsing.

use switcher_animation::{AnimationSpec, Easing};
use switcher_ui_graphics::{Color, ColorParseError, Dp, Point, Shadow};
use thiserror::Error;

pub const DEFAULT_THUMB_RADIUS: f32 = 50.0;
pub const DEFAULT_TRACK_WIDTH: f32 = 80.0;
pub const DEFAULT_INDICATOR_MARGIN: f32 = 10.0;
pub const DEFAULT_TRANSITION_COLOR: Color = Color::from_argb(0xff62_b900);
pub const DEFAULT_BACKGROUND_ALPHA: u8 = 0xaf;
pub const DEFAULT_SHADOW_BLUR: f32 = 8.0;
pub const TOGGLE_DURATION_MILLIS: u64 = 200;
pub const SNAP_DURATION_MILLIS: u64 = 100;
/// Progress moved per pixel of horizontal drag.
pub const DRAG_DAMPING: f32 = 0.125;

pub const ATTR_TRANSITION_COLOR: &str = "transitionColor";
pub const ATTR_INDICATOR_MARGIN: &str = "indicatorMargin";
pub const ATTR_BACKGROUND_COLOR: &str = "backgroundColor";
pub const ATTR_THUMB_COLOR: &str = "thumbColor";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color for attribute `{attribute}`")]
    InvalidColor {
        attribute: String,
        #[source]
        source: ColorParseError,
    },
    #[error("invalid dimension for attribute `{attribute}`: {value:?}")]
    InvalidDimension { attribute: String, value: String },
    #[error("dimension for attribute `{attribute}` must not be negative: {value}")]
    NegativeDimension { attribute: String, value: f32 },
}

/// Visual and timing configuration, fixed for the widget's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitcherConfig {
    pub transition_color: Color,
    pub indicator_margin: f32,
    pub background_color: Color,
    pub thumb_color: Color,
    pub thumb_shadow: Option<Shadow>,
    pub toggle_duration_millis: u64,
    pub snap_duration_millis: u64,
    pub drag_damping: f32,
    pub easing: Easing,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            transition_color: DEFAULT_TRANSITION_COLOR,
            indicator_margin: DEFAULT_INDICATOR_MARGIN,
            background_color: Color::LIGHT_GRAY.with_alpha_u8(DEFAULT_BACKGROUND_ALPHA),
            thumb_color: Color::WHITE,
            thumb_shadow: Some(Shadow::new(DEFAULT_SHADOW_BLUR, Point::ZERO, Color::WHITE)),
            toggle_duration_millis: TOGGLE_DURATION_MILLIS,
            snap_duration_millis: SNAP_DURATION_MILLIS,
            drag_damping: DRAG_DAMPING,
            easing: Easing::Linear,
        }
    }
}

impl SwitcherConfig {
    pub fn with_transition_color(mut self, color: Color) -> Self {
        self.transition_color = color;
        self
    }

    pub fn with_indicator_margin(mut self, margin: f32) -> Self {
        self.indicator_margin = margin;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    pub fn with_thumb_shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.thumb_shadow = shadow;
        self
    }

    pub fn with_durations(mut self, toggle_millis: u64, snap_millis: u64) -> Self {
        self.toggle_duration_millis = toggle_millis;
        self.snap_duration_millis = snap_millis;
        self
    }

    pub fn with_drag_damping(mut self, damping: f32) -> Self {
        self.drag_damping = damping;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn toggle_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.toggle_duration_millis, self.easing)
    }

    pub fn snap_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.snap_duration_millis, self.easing)
    }

    /// Builds a config from styled attributes, starting from the defaults.
    pub fn from_attributes(attributes: &SwitcherAttributes) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in attributes.entries() {
            match key {
                ATTR_TRANSITION_COLOR => config.transition_color = parse_color(key, value)?,
                ATTR_BACKGROUND_COLOR => config.background_color = parse_color(key, value)?,
                ATTR_THUMB_COLOR => config.thumb_color = parse_color(key, value)?,
                ATTR_INDICATOR_MARGIN => {
                    config.indicator_margin = parse_dimension(key, value, attributes.density())?
                }
                other => log::debug!("ignoring unknown switcher attribute `{other}`"),
            }
        }
        Ok(config)
    }
}

/// Styled attributes as delivered by a host's resource system: string
/// key/value pairs plus the display density used to resolve `dp` values.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitcherAttributes {
    entries: Vec<(String, String)>,
    density: f32,
}

impl Default for SwitcherAttributes {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SwitcherAttributes {
    pub fn new(density: f32) -> Self {
        Self {
            entries: Vec::new(),
            density,
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

fn parse_color(attribute: &str, value: &str) -> Result<Color, ConfigError> {
    Color::parse_hex(value.trim()).map_err(|source| ConfigError::InvalidColor {
        attribute: attribute.to_string(),
        source,
    })
}

/// Accepts `12`, `12px` or `12dp`; the result is always in pixels.
fn parse_dimension(attribute: &str, value: &str, density: f32) -> Result<f32, ConfigError> {
    let trimmed = value.trim();
    let (number, is_dp) = if let Some(number) = trimmed.strip_suffix("dp") {
        (number, true)
    } else {
        (trimmed.strip_suffix("px").unwrap_or(trimmed), false)
    };
    let parsed: f32 = number
        .trim()
        .parse()
        .ok()
        .filter(|parsed: &f32| parsed.is_finite())
        .ok_or_else(|| ConfigError::InvalidDimension {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })?;
    if parsed < 0.0 {
        return Err(ConfigError::NegativeDimension {
            attribute: attribute.to_string(),
            value: parsed,
        });
    }
    Ok(if is_dp {
        Dp(parsed).to_px(density)
    } else {
        parsed
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
