use crate::core::GradientRange;
use crate::error::ConfigError;
use crate::render::{Color, LabelStyle, Stroke, TextAlign};

/// Geometry family a series is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    Area,
    Bar,
}

impl SeriesKind {
    /// Line and area outlines connect points in x order.
    #[must_use]
    pub fn requires_monotonic_x(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

/// Outline smoothing for line and area series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothing {
    #[default]
    None,
    /// Cubic segments whose control points lean towards neighbours by
    /// `smoothness` (in `(0, 0.5]`).
    Cubic { smoothness: f64 },
}

/// What `Series::new` does when x decreases in a line or area series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonotonicPolicy {
    #[default]
    Reject,
    Sort,
}

/// Immutable per-series rendering preferences.
///
/// Built once through [`SeriesStyle::builder`], which validates everything
/// up front so a render pass never sees an invalid style.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    kind: SeriesKind,
    color: Color,
    stroke: Stroke,
    gradient: Option<GradientRange>,
    smoothing: Smoothing,
    monotonic_policy: MonotonicPolicy,
    display_chart_values: bool,
    display_chart_values_distance: u32,
    label_spacing: f64,
    label: LabelStyle,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            kind: SeriesKind::Line,
            color: Color::BLUE,
            stroke: Stroke::solid(),
            gradient: None,
            smoothing: Smoothing::None,
            monotonic_policy: MonotonicPolicy::Reject,
            display_chart_values: false,
            display_chart_values_distance: 100,
            label_spacing: 5.0,
            label: LabelStyle::default(),
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn builder() -> SeriesStyleBuilder {
        SeriesStyleBuilder {
            style: Self::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    #[must_use]
    pub fn gradient(&self) -> Option<&GradientRange> {
        self.gradient.as_ref()
    }

    #[must_use]
    pub fn gradient_enabled(&self) -> bool {
        self.gradient.is_some()
    }

    #[must_use]
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    #[must_use]
    pub fn monotonic_policy(&self) -> MonotonicPolicy {
        self.monotonic_policy
    }

    #[must_use]
    pub fn display_chart_values(&self) -> bool {
        self.display_chart_values
    }

    #[must_use]
    pub fn display_chart_values_distance(&self) -> u32 {
        self.display_chart_values_distance
    }

    #[must_use]
    pub fn label_spacing(&self) -> f64 {
        self.label_spacing
    }

    #[must_use]
    pub fn label_style(&self) -> LabelStyle {
        self.label
    }
}

#[derive(Debug, Clone)]
pub struct SeriesStyleBuilder {
    style: SeriesStyle,
}

impl SeriesStyleBuilder {
    #[must_use]
    pub fn kind(mut self, kind: SeriesKind) -> Self {
        self.style.kind = kind;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    #[must_use]
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.style.stroke = stroke;
        self
    }

    #[must_use]
    pub fn gradient(mut self, range: GradientRange) -> Self {
        self.style.gradient = Some(range);
        self
    }

    #[must_use]
    pub fn smoothing(mut self, smoothing: Smoothing) -> Self {
        self.style.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn monotonic_policy(mut self, policy: MonotonicPolicy) -> Self {
        self.style.monotonic_policy = policy;
        self
    }

    #[must_use]
    pub fn display_chart_values(mut self, display: bool) -> Self {
        self.style.display_chart_values = display;
        self
    }

    #[must_use]
    pub fn display_chart_values_distance(mut self, distance_px: u32) -> Self {
        self.style.display_chart_values_distance = distance_px;
        self
    }

    #[must_use]
    pub fn label_spacing(mut self, spacing_px: f64) -> Self {
        self.style.label_spacing = spacing_px;
        self
    }

    #[must_use]
    pub fn label_text_color(mut self, color: Color) -> Self {
        self.style.label.color = color;
        self
    }

    #[must_use]
    pub fn label_text_size(mut self, size_px: f64) -> Self {
        self.style.label.size_px = size_px;
        self
    }

    #[must_use]
    pub fn label_text_align(mut self, align: TextAlign) -> Self {
        self.style.label.align = align;
        self
    }

    pub fn build(self) -> Result<SeriesStyle, ConfigError> {
        let style = self.style;

        for (name, color) in [
            ("color", style.color),
            ("label text color", style.label.color),
        ] {
            color
                .validate()
                .map_err(|err| ConfigError::InvalidStyle(format!("{name}: {err}")))?;
        }

        style.stroke.validate()?;

        if let Smoothing::Cubic { smoothness } = style.smoothing {
            if !smoothness.is_finite() || smoothness <= 0.0 || smoothness > 0.5 {
                return Err(ConfigError::InvalidStyle(
                    "cubic smoothness must be in (0, 0.5]".to_owned(),
                ));
            }
        }

        if !style.label_spacing.is_finite() {
            return Err(ConfigError::InvalidStyle(
                "label spacing must be finite".to_owned(),
            ));
        }

        if !style.label.size_px.is_finite() || style.label.size_px <= 0.0 {
            return Err(ConfigError::InvalidStyle(
                "label text size must be finite and > 0".to_owned(),
            ));
        }

        Ok(style)
    }
}
