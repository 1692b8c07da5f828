use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pass-level settings for [`SeriesRenderer`](super::SeriesRenderer).
///
/// Serializable so hosts can persist renderer setup alongside their own chart
/// configuration. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Gap between bar category groups as a fraction of the group width.
    #[serde(default)]
    pub bar_spacing: f64,
    /// Bar category width when it cannot be derived from point spacing.
    #[serde(default = "default_fallback_category_width_px")]
    pub fallback_category_width_px: f64,
    /// Minimum series count before per-series work moves onto the rayon pool.
    /// Only consulted with the `parallel-render` feature.
    #[serde(default = "default_parallel_min_series")]
    pub parallel_min_series: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            bar_spacing: 0.0,
            fallback_category_width_px: default_fallback_category_width_px(),
            parallel_min_series: default_parallel_min_series(),
        }
    }
}

impl RendererConfig {
    #[must_use]
    pub fn with_bar_spacing(mut self, bar_spacing: f64) -> Self {
        self.bar_spacing = bar_spacing;
        self
    }

    #[must_use]
    pub fn with_fallback_category_width_px(mut self, width_px: f64) -> Self {
        self.fallback_category_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_parallel_min_series(mut self, min_series: usize) -> Self {
        self.parallel_min_series = min_series;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.bar_spacing.is_finite() || self.bar_spacing < 0.0 {
            return Err(ChartError::InvalidData(
                "bar spacing must be finite and >= 0".to_owned(),
            ));
        }
        if !self.fallback_category_width_px.is_finite() || self.fallback_category_width_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "fallback category width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_fallback_category_width_px() -> f64 {
    10.0
}

fn default_parallel_min_series() -> usize {
    4
}
