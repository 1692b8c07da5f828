use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Chart axis used to qualify bounds and mapping failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Raw data-space sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel-space position; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Data extents and pixel size for one render call.
///
/// Only the pixel size is checked here. The data ranges are checked when
/// points are mapped, because a degenerate range is still valid for a
/// single distinct value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub pixel_width: f64,
    pub pixel_height: f64,
}

impl ChartBounds {
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        pixel_width: f64,
        pixel_height: f64,
    ) -> ChartResult<Self> {
        let bounds = Self {
            min_x,
            max_x,
            min_y,
            max_y,
            pixel_width,
            pixel_height,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Fits bounds tightly around `points`.
    ///
    /// Returns `None` for an empty slice or when any point is non-finite.
    #[must_use]
    pub fn fit_points(points: &[DataPoint], pixel_width: f64, pixel_height: f64) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
            pixel_width,
            pixel_height,
        };
        for point in points {
            if !point.is_finite() {
                return None;
            }
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }

    /// Checks the pixel size. Data ranges are left to the value mapper.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.pixel_width.is_finite()
            || !self.pixel_height.is_finite()
            || self.pixel_width <= 0.0
            || self.pixel_height <= 0.0
        {
            return Err(ChartError::InvalidBounds {
                width: self.pixel_width,
                height: self.pixel_height,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }
}
