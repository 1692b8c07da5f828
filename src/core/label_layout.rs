use crate::core::{DataPoint, ScreenPoint, SeriesStyle, ValueFormatter};
use crate::render::Label;

/// Greedy single-pass label selection.
///
/// The first point is always taken. Each later point is taken only when its
/// distance to the last *taken* point is `>= min_distance_px`; skipped points
/// never move the cursor. Order-dependent by construction.
#[must_use]
pub fn select_label_indices(screen: &[ScreenPoint], min_distance_px: f64) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut last_emitted: Option<ScreenPoint> = None;

    for (index, point) in screen.iter().enumerate() {
        let emit = match last_emitted {
            None => true,
            Some(anchor) => point.distance_to(anchor) >= min_distance_px,
        };
        if emit {
            selected.push(index);
            last_emitted = Some(*point);
        }
    }

    selected
}

/// Lays out value labels for one series.
///
/// Returns nothing unless the style displays chart values. Labels sit
/// `label_spacing` pixels above their point.
#[must_use]
pub fn layout_labels(
    points: &[(DataPoint, ScreenPoint)],
    style: &SeriesStyle,
    formatter: &dyn ValueFormatter,
) -> Vec<Label> {
    if !style.display_chart_values() || points.is_empty() {
        return Vec::new();
    }

    let screen: Vec<ScreenPoint> = points.iter().map(|(_, screen)| *screen).collect();
    let min_distance = f64::from(style.display_chart_values_distance());
    let label_style = style.label_style();

    select_label_indices(&screen, min_distance)
        .into_iter()
        .filter_map(|index| {
            let (data, anchor) = points[index];
            let text = formatter.format(data.y);
            // Empty text means the formatter wants this value unlabelled.
            if text.is_empty() {
                return None;
            }
            Some(Label {
                text,
                position: ScreenPoint::new(anchor.x, anchor.y - style.label_spacing()),
                style: label_style,
            })
        })
        .collect()
}
