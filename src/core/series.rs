use tracing::debug;

use crate::core::{DataPoint, MonotonicPolicy, SeriesStyle};
use crate::error::{ChartResult, ConfigError};

/// One named point sequence paired with the style it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<DataPoint>,
    style: SeriesStyle,
}

impl Series {
    /// Builds a series, enforcing non-decreasing x for line and area kinds.
    ///
    /// With [`MonotonicPolicy::Sort`] points are stably sorted by x instead of
    /// rejected. NaN x values cannot be ordered and are always rejected.
    pub fn new(
        name: impl Into<String>,
        mut points: Vec<DataPoint>,
        style: SeriesStyle,
    ) -> ChartResult<Self> {
        let name = name.into();

        if style.kind().requires_monotonic_x() {
            if let Some(index) = points.iter().position(|point| point.x.is_nan()) {
                return Err(ConfigError::UnorderableX { index }.into());
            }

            if let Some(index) = first_decreasing_index(&points) {
                match style.monotonic_policy() {
                    MonotonicPolicy::Reject => {
                        return Err(ConfigError::NonMonotonicSeries { index }.into());
                    }
                    MonotonicPolicy::Sort => {
                        debug!(series = %name, index, "sorting non-monotonic series by x");
                        points.sort_by(|a, b| a.x.total_cmp(&b.x));
                    }
                }
            }
        }

        Ok(Self {
            name,
            points,
            style,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }
}

fn first_decreasing_index(points: &[DataPoint]) -> Option<usize> {
    points
        .windows(2)
        .position(|pair| pair[1].x < pair[0].x)
        .map(|index| index + 1)
}
