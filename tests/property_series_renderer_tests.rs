use chart_series_render::api::{RendererConfig, SeriesRenderer};
use chart_series_render::core::{ChartBounds, DataPoint, Series, SeriesKind, SeriesStyle};
use chart_series_render::render::{Color, DrawCommand, PathElement};
use proptest::prelude::*;

fn build_series(index: usize, ys: &[f64]) -> Series {
    let kind = match index % 3 {
        0 => SeriesKind::Line,
        1 => SeriesKind::Area,
        _ => SeriesKind::Bar,
    };
    let style = SeriesStyle::builder()
        .kind(kind)
        .color(Color::rgb(index as f64 / 16.0, 0.0, 0.0))
        .display_chart_values(index % 2 == 0)
        .display_chart_values_distance(25)
        .build()
        .expect("style");
    let points = ys
        .iter()
        .enumerate()
        .map(|(i, y)| DataPoint::new(i as f64, *y))
        .collect();
    Series::new(format!("s{index}"), points, style).expect("series")
}

proptest! {
    #[test]
    fn path_commands_follow_series_order(
        data in proptest::collection::vec(
            proptest::collection::vec(-100.0f64..100.0, 2..24),
            1..8
        )
    ) {
        let series: Vec<Series> = data
            .iter()
            .enumerate()
            .map(|(index, ys)| build_series(index, ys))
            .collect();
        let bounds = ChartBounds::new(0.0, 24.0, -100.0, 100.0, 1200.0, 600.0).expect("bounds");
        let renderer = SeriesRenderer::new(RendererConfig::default()).expect("renderer");

        let commands = renderer.render(&series, &bounds).expect("render");
        prop_assert_eq!(&commands, &renderer.render(&series, &bounds).expect("render"));

        let path_reds: Vec<f64> = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Path(path) => path.elements.first().map(|e: &PathElement| e.color().red),
                DrawCommand::Label(_) => None,
            })
            .collect();
        let expected: Vec<f64> = (0..series.len()).map(|index| index as f64 / 16.0).collect();
        prop_assert_eq!(path_reds, expected);
    }
}
