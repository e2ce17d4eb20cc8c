use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotUi, Points};

use crate::data::chart::{ChartPoint, ChartSpec};
use crate::state::AppState;

/// Screen-space pick radius for the hover annotation, in points.
const HOVER_RADIUS: f32 = 12.0;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the decontamination scatter plot. An empty chart still draws the
/// axes; it is a valid view, not an error.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;

    let response = Plot::new("decontamination_scatter")
        .legend(Legend::default())
        .x_axis_label(chart.x_title)
        .y_axis_label(chart.y_title)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if chart.size_field.is_some() {
                // Per-point markers so each can carry its own radius. Legend
                // entries still collapse by organism name.
                for point in &chart.points {
                    let marker = Points::new(vec![[point.x, point.y]])
                        .name(&point.organism)
                        .color(state.color_map.color_for(&point.organism))
                        .shape(MarkerShape::Circle)
                        .radius(area_radius(point.sample_area, state.domains.area_range));
                    plot_ui.points(marker);
                }
            } else {
                let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
                for point in &chart.points {
                    groups
                        .entry(point.organism.as_str())
                        .or_default()
                        .push([point.x, point.y]);
                }
                for (organism, positions) in groups {
                    let marker = Points::new(positions)
                        .name(organism)
                        .color(state.color_map.color_for(organism))
                        .shape(MarkerShape::Circle)
                        .radius(3.0);
                    plot_ui.points(marker);
                }
            }

            hovered_point(plot_ui, chart).map(ChartPoint::hover_text)
        });

    if let Some(text) = response.inner {
        response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            ui.label(text);
        });
    }
}

/// The plotted point nearest the cursor, if any lies within the pick radius.
fn hovered_point<'a>(plot_ui: &PlotUi, chart: &'a ChartSpec) -> Option<&'a ChartPoint> {
    let pointer = plot_ui.pointer_coordinate()?;
    let cursor = plot_ui.screen_from_plot(pointer);

    chart
        .points
        .iter()
        .map(|p| {
            let screen = plot_ui.screen_from_plot(PlotPoint::new(p.x, p.y));
            (p, screen.distance(cursor))
        })
        .filter(|(_, dist)| *dist <= HOVER_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

/// Marker radius for the size encoding, scaled across the dataset's area
/// bounds.
fn area_radius(area: f64, (low, high): (f64, f64)) -> f32 {
    if high <= low {
        return 4.0;
    }
    let t = ((area - low) / (high - low)).clamp(0.0, 1.0) as f32;
    2.0 + t * 6.0
}
