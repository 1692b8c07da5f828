use crate::core::{Axis, ChartBounds, DataPoint, LinearScale, ScreenPoint};
use crate::error::{ChartResult, DomainError};

/// Per-axis mapping resolved from bounds and the points being mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisMapping {
    Scaled(LinearScale),
    /// Degenerate range holding at most one distinct value: pinned mid-extent.
    Centered(f64),
}

impl AxisMapping {
    /// Resolves the mapping for `axis`.
    ///
    /// `values` are the coordinates that will be mapped on this axis. They
    /// decide whether a zero-span range is tolerated (one distinct value) or
    /// rejected.
    pub fn resolve(
        bounds: &ChartBounds,
        axis: Axis,
        values: impl IntoIterator<Item = f64>,
    ) -> ChartResult<Self> {
        bounds.validate()?;
        let (min, max) = bounds.range(axis);
        let (extent, inverted) = match axis {
            Axis::X => (bounds.pixel_width, false),
            Axis::Y => (bounds.pixel_height, true),
        };

        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFiniteBounds { axis, min, max }.into());
        }

        if min > max {
            return Err(DomainError::InvertedBounds { axis, min, max }.into());
        }

        if min == max {
            let mut values = values.into_iter();
            if let Some(first) = values.next() {
                if values.any(|value| value != first) {
                    return Err(DomainError::DegenerateBounds { axis, min, max }.into());
                }
            }
            return Ok(Self::Centered(extent / 2.0));
        }

        let scale = LinearScale::new(min, max, extent)?.with_inverted(inverted);
        Ok(Self::Scaled(scale))
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        match self {
            Self::Scaled(scale) => scale.domain_to_pixel(value),
            Self::Centered(center) => center,
        }
    }
}

/// Resolved x/y mapping for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    x: AxisMapping,
    y: AxisMapping,
}

impl ValueMapper {
    /// Builds the mapper for `points` against `bounds`.
    ///
    /// Fails on non-finite input or bounds, inverted ranges, or a zero-span range that
    /// would have to hold more than one distinct value.
    pub fn for_points(points: &[DataPoint], bounds: &ChartBounds) -> ChartResult<Self> {
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(DomainError::NonFiniteValue { index }.into());
        }

        Ok(Self {
            x: AxisMapping::resolve(bounds, Axis::X, points.iter().map(|p| p.x))?,
            y: AxisMapping::resolve(bounds, Axis::Y, points.iter().map(|p| p.y))?,
        })
    }

    #[must_use]
    pub fn map_point(&self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(self.x.map(point.x), self.y.map(point.y))
    }

    /// Maps a data-space y value, e.g. a bar or area baseline.
    #[must_use]
    pub fn map_value_y(&self, value: f64) -> f64 {
        self.y.map(value)
    }
}

/// Maps data points into screen space.
///
/// Output length and order always match the input.
pub fn map_points(points: &[DataPoint], bounds: &ChartBounds) -> ChartResult<Vec<ScreenPoint>> {
    let mapper = ValueMapper::for_points(points, bounds)?;
    Ok(points.iter().map(|point| mapper.map_point(*point)).collect())
}
