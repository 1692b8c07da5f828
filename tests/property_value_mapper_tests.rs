use chart_series_render::core::{ChartBounds, DataPoint, map_points};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mapping_is_affine(
        min_x in -10_000.0f64..10_000.0,
        span_x in 0.01f64..10_000.0,
        min_y in -10_000.0f64..10_000.0,
        span_y in 0.01f64..10_000.0,
        fa in 0.0f64..1.0,
        fb in 0.0f64..1.0,
        ga in 0.0f64..1.0,
        gb in 0.0f64..1.0,
    ) {
        let bounds = ChartBounds::new(min_x, min_x + span_x, min_y, min_y + span_y, 1600.0, 900.0)
            .expect("valid bounds");
        let a = DataPoint::new(min_x + fa * span_x, min_y + ga * span_y);
        let b = DataPoint::new(min_x + fb * span_x, min_y + gb * span_y);
        let mid = DataPoint::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);

        let mapped = map_points(&[a, b, mid], &bounds).expect("map");

        // Affine maps preserve midpoints.
        prop_assert!((mapped[2].x - (mapped[0].x + mapped[1].x) * 0.5).abs() <= 1e-4);
        prop_assert!((mapped[2].y - (mapped[0].y + mapped[1].y) * 0.5).abs() <= 1e-4);

        // Pixel distances scale by the per-axis factor.
        let expected_dx = (b.x - a.x) / span_x * 1600.0;
        let expected_dy = -(b.y - a.y) / span_y * 900.0;
        prop_assert!(((mapped[1].x - mapped[0].x) - expected_dx).abs() <= 1e-4);
        prop_assert!(((mapped[1].y - mapped[0].y) - expected_dy).abs() <= 1e-4);
    }

    #[test]
    fn in_range_points_land_inside_the_plot(
        xs in proptest::collection::vec(0.0f64..100.0, 0..64),
    ) {
        let bounds = ChartBounds::new(0.0, 100.0, 0.0, 100.0, 800.0, 600.0).expect("valid bounds");
        let points: Vec<DataPoint> = xs.iter().map(|x| DataPoint::new(*x, 100.0 - *x)).collect();

        let mapped = map_points(&points, &bounds).expect("map");
        prop_assert_eq!(mapped.len(), points.len());
        for point in mapped {
            prop_assert!((0.0..=800.0).contains(&point.x));
            prop_assert!((0.0..=600.0).contains(&point.y));
        }
    }
}
