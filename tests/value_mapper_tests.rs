use chart_series_render::core::{
    Axis, ChartBounds, DataPoint, ScreenPoint, ValueMapper, map_points,
};
use chart_series_render::{ChartError, DomainError};
use chrono::DateTime;
use rust_decimal::Decimal;

fn bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> ChartBounds {
    ChartBounds::new(min_x, max_x, min_y, max_y, 1000.0, 500.0).expect("valid bounds")
}

#[test]
fn mapping_scales_x_and_inverts_y() {
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(5.0, 50.0),
        DataPoint::new(10.0, 100.0),
    ];

    let mapped = map_points(&points, &bounds(0.0, 10.0, 0.0, 100.0)).expect("map");
    assert_eq!(
        mapped,
        vec![
            ScreenPoint::new(0.0, 500.0),
            ScreenPoint::new(500.0, 250.0),
            ScreenPoint::new(1000.0, 0.0),
        ]
    );
}

#[test]
fn mapping_preserves_length_and_order() {
    let points: Vec<DataPoint> = (0..32)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 5)))
        .collect();

    let mapped = map_points(&points, &bounds(0.0, 31.0, 0.0, 4.0)).expect("map");
    assert_eq!(mapped.len(), points.len());
    assert!(mapped.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn empty_input_maps_to_empty_even_with_degenerate_bounds() {
    let mapped = map_points(&[], &bounds(3.0, 3.0, 1.0, 1.0)).expect("map");
    assert!(mapped.is_empty());
}

#[test]
fn single_point_on_degenerate_bounds_is_centered() {
    let mapped = map_points(&[DataPoint::new(3.0, 7.0)], &bounds(3.0, 3.0, 7.0, 7.0)).expect("map");
    assert_eq!(mapped, vec![ScreenPoint::new(500.0, 250.0)]);
}

#[test]
fn repeated_coordinate_on_degenerate_axis_is_centered() {
    let points = vec![DataPoint::new(4.0, 0.0), DataPoint::new(4.0, 100.0)];

    let mapped = map_points(&points, &bounds(4.0, 4.0, 0.0, 100.0)).expect("map");
    assert_eq!(mapped[0], ScreenPoint::new(500.0, 500.0));
    assert_eq!(mapped[1], ScreenPoint::new(500.0, 0.0));
}

#[test]
fn degenerate_bounds_with_distinct_values_are_rejected() {
    let points = vec![DataPoint::new(1.0, 10.0), DataPoint::new(2.0, 10.0)];

    let err = map_points(&points, &bounds(1.0, 1.0, 0.0, 20.0)).expect_err("degenerate x");
    assert!(matches!(
        err,
        ChartError::Domain(DomainError::DegenerateBounds { axis: Axis::X, .. })
    ));

    let points = vec![DataPoint::new(1.0, 10.0), DataPoint::new(2.0, 11.0)];
    let err = map_points(&points, &bounds(0.0, 5.0, 10.0, 10.0)).expect_err("degenerate y");
    assert!(matches!(
        err,
        ChartError::Domain(DomainError::DegenerateBounds { axis: Axis::Y, .. })
    ));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = map_points(&[DataPoint::new(1.0, 1.0)], &bounds(10.0, 0.0, 0.0, 10.0))
        .expect_err("inverted x");
    assert_eq!(
        err,
        ChartError::Domain(DomainError::InvertedBounds {
            axis: Axis::X,
            min: 10.0,
            max: 0.0,
        })
    );
}

#[test]
fn non_finite_points_are_rejected_with_index() {
    let points = vec![DataPoint::new(1.0, 1.0), DataPoint::new(2.0, f64::NAN)];

    let err = map_points(&points, &bounds(0.0, 10.0, 0.0, 10.0)).expect_err("nan");
    assert_eq!(err, ChartError::Domain(DomainError::NonFiniteValue { index: 1 }));
}

#[test]
fn invalid_pixel_size_is_rejected_at_construction() {
    let err = ChartBounds::new(0.0, 1.0, 0.0, 1.0, 0.0, 100.0).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));
}

#[test]
fn non_finite_data_bounds_fail_at_mapping() {
    let bounds = ChartBounds::new(0.0, 1.0, 0.0, f64::INFINITY, 10.0, 10.0)
        .expect("pixel size is valid");
    let points = vec![DataPoint::new(0.5, 0.5)];

    let err = map_points(&points, &bounds).expect_err("infinite max_y");
    assert!(matches!(
        err,
        ChartError::Domain(DomainError::NonFiniteBounds { axis: Axis::Y, .. })
    ));
}

#[test]
fn baseline_maps_through_the_y_axis() {
    let points = vec![DataPoint::new(0.0, -50.0), DataPoint::new(1.0, 50.0)];
    let mapper = ValueMapper::for_points(&points, &bounds(0.0, 1.0, -50.0, 50.0)).expect("mapper");
    assert_eq!(mapper.map_value_y(0.0), 250.0);
}

#[test]
fn fit_points_spans_the_data() {
    let points = vec![
        DataPoint::new(2.0, -1.0),
        DataPoint::new(8.0, 4.0),
        DataPoint::new(5.0, 9.0),
    ];
    let fitted = ChartBounds::fit_points(&points, 640.0, 480.0).expect("fit");
    assert_eq!(fitted.range(Axis::X), (2.0, 8.0));
    assert_eq!(fitted.range(Axis::Y), (-1.0, 9.0));
    assert!(ChartBounds::fit_points(&[], 640.0, 480.0).is_none());
}

#[test]
fn decimal_time_ingestion_converts_to_f64() {
    let time = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let point = DataPoint::from_decimal_time(time, Decimal::new(12_345, 2)).expect("convert");

    assert_eq!(point.x, 1_700_000_000.0);
    assert!((point.y - 123.45).abs() <= 1e-9);
}
