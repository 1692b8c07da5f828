use chart_series_render::core::{
    DataPoint, MonotonicPolicy, Series, SeriesKind, SeriesStyle, Smoothing,
};
use chart_series_render::render::{Color, Stroke, TextAlign};
use chart_series_render::{ChartError, ConfigError};

fn points(xs: &[f64]) -> Vec<DataPoint> {
    xs.iter().map(|x| DataPoint::new(*x, *x * 2.0)).collect()
}

#[test]
fn style_defaults_follow_series_renderer_conventions() {
    let style = SeriesStyle::builder().build().expect("default style");

    assert_eq!(style.kind(), SeriesKind::Line);
    assert_eq!(style.color(), Color::BLUE);
    assert!(!style.gradient_enabled());
    assert!(!style.display_chart_values());
    assert_eq!(style.display_chart_values_distance(), 100);
    assert_eq!(style.label_spacing(), 5.0);
    assert_eq!(style.label_style().size_px, 10.0);
    assert_eq!(style.label_style().align, TextAlign::Center);
    assert_eq!(style.label_style().color, Color::BLUE);
    assert!(!style.stroke().is_dashed());
}

#[test]
fn invalid_stroke_is_rejected_at_build_time() {
    let err = SeriesStyle::builder()
        .stroke(Stroke::solid().with_width(-1.0))
        .build()
        .expect_err("negative width");
    assert!(matches!(err, ConfigError::InvalidStyle(_)));
}

#[test]
fn smoothness_outside_range_is_rejected() {
    for smoothness in [0.0, 0.8, f64::NAN] {
        let result = SeriesStyle::builder()
            .smoothing(Smoothing::Cubic { smoothness })
            .build();
        assert!(result.is_err(), "smoothness {smoothness} must be rejected");
    }
}

#[test]
fn label_metrics_are_validated() {
    assert!(SeriesStyle::builder().label_text_size(0.0).build().is_err());
    assert!(SeriesStyle::builder().label_spacing(f64::NAN).build().is_err());
    assert!(SeriesStyle::builder()
        .color(Color::rgba(0.0, 0.0, 0.0, 1.5))
        .build()
        .is_err());
}

#[test]
fn decreasing_x_is_rejected_for_line_series() {
    let style = SeriesStyle::builder().build().expect("style");
    let err = Series::new("line", points(&[0.0, 1.0, 0.5, 2.0]), style).expect_err("unsorted");
    assert_eq!(
        err,
        ChartError::Config(ConfigError::NonMonotonicSeries { index: 2 })
    );
}

#[test]
fn equal_x_values_are_allowed() {
    let style = SeriesStyle::builder()
        .kind(SeriesKind::Area)
        .build()
        .expect("style");
    let series = Series::new("area", points(&[0.0, 1.0, 1.0, 2.0]), style).expect("sorted");
    assert_eq!(series.points().len(), 4);
}

#[test]
fn sort_policy_orders_points_by_x() {
    let style = SeriesStyle::builder()
        .monotonic_policy(MonotonicPolicy::Sort)
        .build()
        .expect("style");
    let series = Series::new("sorted", points(&[3.0, 1.0, 2.0]), style).expect("sorted");

    let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(series.points()[0].y, 2.0);
}

#[test]
fn bar_series_keep_caller_order() {
    let style = SeriesStyle::builder()
        .kind(SeriesKind::Bar)
        .build()
        .expect("style");
    let series = Series::new("bars", points(&[3.0, 1.0, 2.0]), style).expect("bars");

    let xs: Vec<f64> = series.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn nan_x_cannot_be_ordered() {
    let style = SeriesStyle::builder()
        .monotonic_policy(MonotonicPolicy::Sort)
        .build()
        .expect("style");
    let err = Series::new("nan", points(&[0.0, f64::NAN]), style).expect_err("nan x");
    assert_eq!(err, ChartError::Config(ConfigError::UnorderableX { index: 1 }));
}
