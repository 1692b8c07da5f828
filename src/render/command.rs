use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LabelStyle, Stroke};

/// One drawable piece of a series path, each carrying its own color so
/// gradient-colored series need no per-pixel shader downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    /// Lone point of a single-sample line or area series.
    Marker { at: ScreenPoint, color: Color },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    Cubic {
        from: ScreenPoint,
        ctrl1: ScreenPoint,
        ctrl2: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        color: Color,
    },
}

impl PathElement {
    #[must_use]
    pub fn color(&self) -> Color {
        match *self {
            Self::Marker { color, .. }
            | Self::Line { color, .. }
            | Self::Cubic { color, .. }
            | Self::Rect { color, .. } => color,
        }
    }

    fn validate(&self) -> ChartResult<()> {
        let coords_finite = match *self {
            Self::Marker { at, .. } => finite_point(at),
            Self::Line { from, to, .. } => finite_point(from) && finite_point(to),
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
                ..
            } => [from, ctrl1, ctrl2, to].into_iter().all(finite_point),
            Self::Rect {
                left,
                top,
                right,
                bottom,
                ..
            } => {
                if left > right || top > bottom {
                    return Err(ChartError::InvalidData(
                        "rect edges must be ordered".to_owned(),
                    ));
                }
                [left, top, right, bottom].iter().all(|v| v.is_finite())
            }
        };
        if !coords_finite {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        self.color().validate()
    }
}

/// Filled region below an area outline, closed against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaFill {
    pub polygon: Vec<ScreenPoint>,
    pub color: Color,
}

/// Drawable geometry for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub elements: Vec<PathElement>,
    pub stroke: Stroke,
    pub fill: Option<AreaFill>,
}

impl Path {
    #[must_use]
    pub fn empty(stroke: Stroke) -> Self {
        Self {
            elements: Vec::new(),
            stroke,
            fill: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.fill.is_none()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.stroke
            .validate()
            .map_err(|err| ChartError::InvalidData(err.to_string()))?;
        for element in &self.elements {
            element.validate()?;
        }
        if let Some(fill) = &self.fill {
            if !fill.polygon.iter().copied().all(finite_point) {
                return Err(ChartError::InvalidData(
                    "area fill coordinates must be finite".to_owned(),
                ));
            }
            fill.color.validate()?;
        }
        Ok(())
    }
}

/// Positioned value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: ScreenPoint,
    pub style: LabelStyle,
}

impl Label {
    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !finite_point(self.position) {
            return Err(ChartError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        if !self.style.size_px.is_finite() || self.style.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.style.color.validate()
    }
}

/// Output contract of a render pass, consumed by a rasterizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Path(Path),
    Label(Label),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Label(label) => label.validate(),
        }
    }
}

fn finite_point(point: ScreenPoint) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
