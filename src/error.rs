use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised while mapping data space into screen space.
///
/// These are scoped to one series: the series renderer skips the offending
/// series and keeps rendering the rest of the chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("degenerate {axis} bounds: min={min}, max={max} with more than one distinct value")]
    DegenerateBounds { axis: Axis, min: f64, max: f64 },

    #[error("inverted {axis} bounds: min={min} > max={max}")]
    InvertedBounds { axis: Axis, min: f64, max: f64 },

    #[error("non-finite {axis} bounds: min={min}, max={max}")]
    NonFiniteBounds { axis: Axis, min: f64, max: f64 },

    #[error("non-finite data point at index {index}")]
    NonFiniteValue { index: usize },
}

/// Failures raised while building style or series configuration.
///
/// These never reach a render pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid gradient range: start value {start_value} must be <= stop value {stop_value}")]
    InvalidGradientRange { start_value: f64, stop_value: f64 },

    #[error("non-monotonic series: x decreases at index {index}")]
    NonMonotonicSeries { index: usize },

    #[error("series x at index {index} is NaN and cannot be ordered")]
    UnorderableX { index: usize },

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid chart bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render pass cancelled after {completed_series} series")]
    Cancelled { completed_series: usize },
}
