use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult, ConfigError};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Unpacks a `0xAARRGGBB` integer as used by platform color APIs.
    #[must_use]
    pub fn from_argb_u32(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xff) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    /// Channel-wise linear blend, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke descriptor handed through to the rasterizer untouched.
///
/// `dash` alternates on/off lengths in pixels; empty means solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub dash: SmallVec<[f64; 4]>,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid()
    }
}

impl Stroke {
    #[must_use]
    pub fn solid() -> Self {
        Self {
            width: 1.0,
            dash: SmallVec::new(),
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }

    #[must_use]
    pub fn dashed() -> Self {
        Self::solid().with_dash(&[10.0, 10.0])
    }

    #[must_use]
    pub fn dotted() -> Self {
        Self {
            cap: LineCap::Round,
            ..Self::solid().with_dash(&[2.0, 10.0])
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConfigError::InvalidStyle(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self
            .dash
            .iter()
            .any(|length| !length.is_finite() || *length <= 0.0)
        {
            return Err(ConfigError::InvalidStyle(
                "stroke dash lengths must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

/// Text appearance carried by every label command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: Color,
    pub size_px: f64,
    pub align: TextAlign,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::BLUE,
            size_px: 10.0,
            align: TextAlign::Center,
        }
    }
}
