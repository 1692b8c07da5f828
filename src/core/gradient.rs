use crate::error::ConfigError;
use crate::render::Color;

/// Value range over which a series color is interpolated.
///
/// Only constructible through [`GradientRange::new`], so `start_value <=
/// stop_value` holds for every instance that reaches a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientRange {
    start_value: f64,
    start_color: Color,
    stop_value: f64,
    stop_color: Color,
}

impl GradientRange {
    pub fn new(
        start_value: f64,
        start_color: Color,
        stop_value: f64,
        stop_color: Color,
    ) -> Result<Self, ConfigError> {
        if !start_value.is_finite() || !stop_value.is_finite() {
            return Err(ConfigError::InvalidStyle(
                "gradient values must be finite".to_owned(),
            ));
        }
        if start_value > stop_value {
            return Err(ConfigError::InvalidGradientRange {
                start_value,
                stop_value,
            });
        }
        for color in [start_color, stop_color] {
            color
                .validate()
                .map_err(|err| ConfigError::InvalidStyle(format!("gradient color: {err}")))?;
        }

        Ok(Self {
            start_value,
            start_color,
            stop_value,
            stop_color,
        })
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    #[must_use]
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    #[must_use]
    pub fn stop_value(&self) -> f64 {
        self.stop_value
    }

    #[must_use]
    pub fn stop_color(&self) -> Color {
        self.stop_color
    }
}

/// Resolves the color for `value` within `range`.
///
/// Values at or beyond either end take that end's color; NaN takes the start
/// color.
#[must_use]
pub fn resolve_gradient(value: f64, range: &GradientRange) -> Color {
    if value.is_nan() || value <= range.start_value {
        return range.start_color;
    }
    if value >= range.stop_value {
        return range.stop_color;
    }

    let t = (value - range.start_value) / (range.stop_value - range.start_value);
    range.start_color.lerp(range.stop_color, t)
}
