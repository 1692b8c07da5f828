use crate::core::{DataPoint, ScreenPoint, SeriesKind, SeriesStyle, Smoothing, resolve_gradient};
use crate::error::{ChartError, ChartResult};
use crate::render::{AreaFill, Color, Path, PathElement};

/// Horizontal slot assignment for bar series sharing a category.
///
/// Every bar-kind series in a pass gets an equal share of the category's
/// group width, offset by its index among the bar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub series_index: usize,
    pub series_count: usize,
    /// Gap between category groups as a fraction of the group width.
    pub bar_spacing: f64,
    /// Category width used when it cannot be derived from point spacing.
    pub fallback_category_width_px: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            series_index: 0,
            series_count: 1,
            bar_spacing: 0.0,
            fallback_category_width_px: 10.0,
        }
    }
}

impl BarLayout {
    pub fn new(
        series_index: usize,
        series_count: usize,
        bar_spacing: f64,
        fallback_category_width_px: f64,
    ) -> ChartResult<Self> {
        if series_count == 0 || series_index >= series_count {
            return Err(ChartError::InvalidData(format!(
                "bar slot {series_index} out of range for {series_count} bar series"
            )));
        }
        if !bar_spacing.is_finite() || bar_spacing < 0.0 {
            return Err(ChartError::InvalidData(
                "bar spacing must be finite and >= 0".to_owned(),
            ));
        }
        if !fallback_category_width_px.is_finite() || fallback_category_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "fallback category width must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            series_index,
            series_count,
            bar_spacing,
            fallback_category_width_px,
        })
    }

    /// Mean horizontal distance between consecutive points, or the fallback.
    ///
    /// Points are taken in series order, so unsorted bar series still measure
    /// the gaps between neighbours.
    #[must_use]
    pub fn category_width(&self, screen: &[ScreenPoint]) -> f64 {
        if screen.len() >= 2 {
            let total: f64 = screen
                .windows(2)
                .map(|pair| (pair[1].x - pair[0].x).abs())
                .sum();
            let mean = total / (screen.len() - 1) as f64;
            if mean.is_finite() && mean > 0.0 {
                return mean;
            }
        }
        self.fallback_category_width_px
    }
}

/// Builds the drawable path for one mapped series.
///
/// `points` pairs each data sample with its mapped screen position.
/// `baseline_y` is the mapped pixel row of data-space `y = 0`, used by bars and
/// area fills. Empty input yields an empty path and a single sample yields a
/// marker (or one bar); neither is an error.
///
/// Gradients color the outline and bar elements only. An area fill always
/// uses the flat series color.
#[must_use]
pub fn build_path(
    points: &[(DataPoint, ScreenPoint)],
    style: &SeriesStyle,
    baseline_y: f64,
    bar_layout: &BarLayout,
) -> Path {
    let mut path = Path::empty(style.stroke().clone());
    if points.is_empty() {
        return path;
    }

    match style.kind() {
        SeriesKind::Line => {
            path.elements = outline_elements(points, style);
        }
        SeriesKind::Area => {
            path.elements = outline_elements(points, style);
            path.fill = area_fill(points, style.color(), baseline_y);
        }
        SeriesKind::Bar => {
            path.elements = bar_elements(points, style, baseline_y, bar_layout);
        }
    }

    path
}

fn element_color(style: &SeriesStyle, data_y: f64) -> Color {
    match style.gradient() {
        Some(range) => resolve_gradient(data_y, range),
        None => style.color(),
    }
}

fn outline_elements(points: &[(DataPoint, ScreenPoint)], style: &SeriesStyle) -> Vec<PathElement> {
    if let [(data, screen)] = points {
        return vec![PathElement::Marker {
            at: *screen,
            color: element_color(style, data.y),
        }];
    }

    let screen: Vec<ScreenPoint> = points.iter().map(|(_, screen)| *screen).collect();
    let last = screen.len() - 1;

    let mut elements = Vec::with_capacity(last);
    for i in 0..last {
        let (from_data, from) = points[i];
        let (to_data, to) = points[i + 1];
        let color = element_color(style, (from_data.y + to_data.y) * 0.5);

        let element = match style.smoothing() {
            Smoothing::None => PathElement::Line { from, to, color },
            Smoothing::Cubic { smoothness } => {
                let prev = screen[i.saturating_sub(1)];
                let next = screen[(i + 2).min(last)];
                PathElement::Cubic {
                    from,
                    ctrl1: ScreenPoint::new(
                        from.x + (to.x - prev.x) * smoothness,
                        from.y + (to.y - prev.y) * smoothness,
                    ),
                    ctrl2: ScreenPoint::new(
                        to.x - (next.x - from.x) * smoothness,
                        to.y - (next.y - from.y) * smoothness,
                    ),
                    to,
                    color,
                }
            }
        };
        elements.push(element);
    }

    elements
}

fn area_fill(
    points: &[(DataPoint, ScreenPoint)],
    color: Color,
    baseline_y: f64,
) -> Option<AreaFill> {
    if points.len() < 2 {
        return None;
    }

    let first_x = points[0].1.x;
    let last_x = points[points.len() - 1].1.x;

    let mut polygon = Vec::with_capacity(points.len() + 3);
    polygon.push(ScreenPoint::new(first_x, baseline_y));
    polygon.extend(points.iter().map(|(_, screen)| *screen));
    polygon.push(ScreenPoint::new(last_x, baseline_y));
    // Repeat the first baseline vertex so the polygon is explicitly closed.
    polygon.push(ScreenPoint::new(first_x, baseline_y));

    Some(AreaFill { polygon, color })
}

fn bar_elements(
    points: &[(DataPoint, ScreenPoint)],
    style: &SeriesStyle,
    baseline_y: f64,
    layout: &BarLayout,
) -> Vec<PathElement> {
    let screen: Vec<ScreenPoint> = points.iter().map(|(_, screen)| *screen).collect();
    let group_width = layout.category_width(&screen) / (1.0 + layout.bar_spacing);
    let bar_width = group_width / layout.series_count as f64;
    let slot_offset = -group_width * 0.5 + layout.series_index as f64 * bar_width;

    points
        .iter()
        .map(|(data, screen)| {
            let left = screen.x + slot_offset;
            PathElement::Rect {
                left,
                top: screen.y.min(baseline_y),
                right: left + bar_width,
                bottom: screen.y.max(baseline_y),
                color: element_color(style, data.y),
            }
        })
        .collect()
}
