use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::{AppState, CategoryField};

pub const DASHBOARD_TITLE: &str =
    "Interactive plotting of the most important factors affecting DBD decontamination efficacy";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Filters");
        if ui.small_button("Reset").clicked() {
            state.reset_filters();
        }
    });
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Range sliders ----
            changed |= range_section(
                ui,
                "Filter by pH",
                state.domains.ph_range,
                &mut state.ph_low,
                &mut state.ph_high,
                None,
            );
            ui.separator();
            changed |= range_section(
                ui,
                "Filter by area of the sample (cm²)",
                state.domains.area_range,
                &mut state.area_low,
                &mut state.area_high,
                Some(1),
            );
            ui.separator();

            // ---- Category selectors ----
            category_section(ui, "Matrix category", CategoryField::MatrixCategory, state);
            category_section(
                ui,
                "Upper electrode shape",
                CategoryField::ElectrodeShape,
                state,
            );
        });

    // Slider drags don't go through AppState methods, so recompute here.
    if changed {
        state.refresh_chart();
    }
}

/// Min/max slider pair over the column's bounds. Returns whether either
/// slider moved this frame.
fn range_section(
    ui: &mut Ui,
    label: &str,
    bounds: (f64, f64),
    low: &mut f64,
    high: &mut f64,
    decimals: Option<usize>,
) -> bool {
    ui.strong(label);

    let (min, max) = bounds;
    let mut slider = |value: &mut f64, text: &str| {
        let mut widget = egui::Slider::new(value, min..=max).text(text);
        if let Some(d) = decimals {
            widget = widget.fixed_decimals(d);
        }
        ui.add(widget).changed()
    };

    let mut changed = slider(low, "from");
    changed |= slider(high, "to");
    changed
}

/// Collapsible multi-select checkbox list for one categorical column.
fn category_section(ui: &mut Ui, label: &str, field: CategoryField, state: &mut AppState) {
    let options: Vec<String> = state.domain(field).to_vec();

    let n_selected = state.selection(field).len();
    let header_text = format!("{label}  ({n_selected}/{})", options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if options.is_empty() {
                ui.label("No options in this dataset.");
                return;
            }

            // Select all / none buttons
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(field);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(field);
                }
            });

            for value in &options {
                let mut checked = state.selection(field).contains(value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    state.toggle_category(field, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts and view options.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.heading(DASHBOARD_TITLE);

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} experiments loaded, {} shown",
            state.dataset.len(),
            state.chart.points.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.size_by_area, "Size by sample area")
            .clicked()
        {
            state.size_by_area = !state.size_by_area;
            state.refresh_chart();
        }
    });
}
