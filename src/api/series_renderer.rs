use std::sync::Arc;

#[cfg(feature = "parallel-render")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::core::{
    BarLayout, ChartBounds, DataPoint, DefaultValueFormatter, ScreenPoint, Series, SeriesKind,
    ValueFormatter, ValueMapper, build_path, layout_labels,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawCommand, Renderer};

use super::{CancelToken, RendererConfig};

/// A series dropped from a pass, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFailure {
    pub series_index: usize,
    pub series_name: String,
    pub error: ChartError,
}

/// Result of one pass: the ordered commands plus any skipped series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderReport {
    pub commands: Vec<DrawCommand>,
    pub failures: Vec<SeriesFailure>,
}

impl RenderReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

type SeriesOutcome = Option<ChartResult<Vec<DrawCommand>>>;

/// Turns styled series into an ordered draw-command list.
///
/// Series are emitted in caller order, so later series draw on top. Each
/// series contributes its path command followed by its label commands. A
/// series that fails to map is skipped and logged; the rest still render.
///
/// The renderer holds no per-pass state and can be shared across threads.
#[derive(Clone)]
pub struct SeriesRenderer {
    config: RendererConfig,
    formatter: Arc<dyn ValueFormatter>,
}

impl std::fmt::Debug for SeriesRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SeriesRenderer {
    pub fn new(config: RendererConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            formatter: Arc::new(DefaultValueFormatter),
        })
    }

    /// Replaces the value-label formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn config(&self) -> RendererConfig {
        self.config
    }

    /// Renders all series, skipping the ones that fail to map.
    ///
    /// Only invalid pixel bounds fail the whole pass.
    pub fn render(
        &self,
        series: &[Series],
        bounds: &ChartBounds,
    ) -> ChartResult<Vec<DrawCommand>> {
        Ok(self.render_report(series, bounds)?.commands)
    }

    /// Like [`render`](Self::render) but also reports skipped series.
    pub fn render_report(
        &self,
        series: &[Series],
        bounds: &ChartBounds,
    ) -> ChartResult<RenderReport> {
        self.run_pass(series, bounds, None)
    }

    /// Renders with cooperative cancellation checked between series.
    ///
    /// A cancelled pass returns [`ChartError::Cancelled`] and no commands.
    pub fn render_with_cancel(
        &self,
        series: &[Series],
        bounds: &ChartBounds,
        token: &CancelToken,
    ) -> ChartResult<RenderReport> {
        self.run_pass(series, bounds, Some(token))
    }

    /// Renders and hands the commands to `renderer` in one step.
    pub fn render_to<R: Renderer>(
        &self,
        renderer: &mut R,
        series: &[Series],
        bounds: &ChartBounds,
    ) -> ChartResult<RenderReport> {
        let report = self.render_report(series, bounds)?;
        renderer.render(&report.commands)?;
        Ok(report)
    }

    /// Maps, builds and labels a single series.
    pub fn render_series(
        &self,
        series: &Series,
        bounds: &ChartBounds,
        bar_layout: &BarLayout,
    ) -> ChartResult<Vec<DrawCommand>> {
        let style = series.style();
        let mapper = ValueMapper::for_points(series.points(), bounds)?;
        let mapped: Vec<(DataPoint, ScreenPoint)> = series
            .points()
            .iter()
            .map(|point| (*point, mapper.map_point(*point)))
            .collect();

        let path = build_path(&mapped, style, mapper.map_value_y(0.0), bar_layout);
        let labels = layout_labels(&mapped, style, self.formatter.as_ref());
        trace!(
            series = series.name(),
            points = mapped.len(),
            elements = path.elements.len(),
            labels = labels.len(),
            "rendered series"
        );

        let mut commands = Vec::with_capacity(1 + labels.len());
        commands.push(DrawCommand::Path(path));
        commands.extend(labels.into_iter().map(DrawCommand::Label));
        Ok(commands)
    }

    fn run_pass(
        &self,
        series: &[Series],
        bounds: &ChartBounds,
        token: Option<&CancelToken>,
    ) -> ChartResult<RenderReport> {
        bounds.validate()?;
        debug!(series = series.len(), "render pass start");

        let layouts = self.bar_layouts(series)?;
        let outcomes = self.compute_outcomes(series, bounds, &layouts, token);

        let mut report = RenderReport::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            let Some(result) = outcome else {
                debug!(completed_series = index, "render pass cancelled");
                return Err(ChartError::Cancelled {
                    completed_series: index,
                });
            };
            match result {
                Ok(commands) => report.commands.extend(commands),
                Err(error) => {
                    warn!(
                        series = series[index].name(),
                        index,
                        %error,
                        "skipping series that failed to render"
                    );
                    report.failures.push(SeriesFailure {
                        series_index: index,
                        series_name: series[index].name().to_owned(),
                        error,
                    });
                }
            }
        }

        debug!(
            commands = report.commands.len(),
            skipped = report.failures.len(),
            "render pass done"
        );
        Ok(report)
    }

    fn bar_layouts(&self, series: &[Series]) -> ChartResult<Vec<BarLayout>> {
        let bar_count = series
            .iter()
            .filter(|s| s.style().kind() == SeriesKind::Bar)
            .count()
            .max(1);

        let mut bar_index = 0;
        let mut layouts = Vec::with_capacity(series.len());
        for s in series {
            let slot = if s.style().kind() == SeriesKind::Bar {
                bar_index += 1;
                bar_index - 1
            } else {
                0
            };
            layouts.push(BarLayout::new(
                slot,
                bar_count,
                self.config.bar_spacing,
                self.config.fallback_category_width_px,
            )?);
        }
        Ok(layouts)
    }

    /// One outcome per series in input order; `None` marks a series that was
    /// not started because the token was cancelled.
    fn compute_outcomes(
        &self,
        series: &[Series],
        bounds: &ChartBounds,
        layouts: &[BarLayout],
        token: Option<&CancelToken>,
    ) -> Vec<SeriesOutcome> {
        let cancelled = || token.is_some_and(CancelToken::is_cancelled);

        #[cfg(feature = "parallel-render")]
        {
            if series.len() >= self.config.parallel_min_series.max(2) {
                // Computation order is free; collect keeps input order.
                return series
                    .par_iter()
                    .zip(layouts.par_iter())
                    .map(|(s, layout)| {
                        if cancelled() {
                            return None;
                        }
                        Some(self.render_series(s, bounds, layout))
                    })
                    .collect();
            }
        }

        let mut outcomes = Vec::with_capacity(series.len());
        for (s, layout) in series.iter().zip(layouts) {
            if cancelled() {
                outcomes.push(None);
                break;
            }
            outcomes.push(Some(self.render_series(s, bounds, layout)));
        }
        outcomes
    }
}
