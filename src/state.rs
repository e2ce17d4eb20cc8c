use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::chart::ChartSpec;
use crate::data::filter::{render, CategorySelection, FilterState};
use crate::data::model::{Dataset, FilterDomains};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The two multi-select filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    MatrixCategory,
    ElectrodeShape,
}

/// The full UI state, independent of rendering. The dataset and its domains
/// are fixed at startup; everything else mirrors the current control values.
pub struct AppState {
    /// Loaded dataset, read-only for the process lifetime.
    pub dataset: Dataset,

    /// Control bounds derived from the dataset.
    pub domains: FilterDomains,

    /// Range slider positions.
    pub ph_low: f64,
    pub ph_high: f64,
    pub area_low: f64,
    pub area_high: f64,

    /// Checked values of the two category selectors.
    pub selected_matrix: BTreeSet<String>,
    pub selected_shapes: BTreeSet<String>,

    /// Whether marker size encodes the sample area.
    pub size_by_area: bool,

    /// Colour per organism genus.
    pub color_map: ColorMap,

    /// Most recently rendered chart (what the central panel shows).
    pub chart: ChartSpec,
}

impl AppState {
    /// Start from the all-inclusive view: full ranges, every category selected.
    pub fn new(dataset: Dataset, domains: FilterDomains) -> Self {
        let color_map = ColorMap::new(dataset.organisms());
        let mut state = AppState {
            ph_low: domains.ph_range.0,
            ph_high: domains.ph_range.1,
            area_low: domains.area_range.0,
            area_high: domains.area_range.1,
            selected_matrix: domains.matrix_categories.iter().cloned().collect(),
            selected_shapes: domains.electrode_shapes.iter().cloned().collect(),
            size_by_area: false,
            color_map,
            chart: ChartSpec::new(Vec::new()),
            dataset,
            domains,
        };
        state.refresh_chart();
        state
    }

    /// Snapshot the controls into the value object the pipeline consumes.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            ph_range: (self.ph_low, self.ph_high),
            area_range: (self.area_low, self.area_high),
            matrix_categories: CategorySelection::Many(
                self.selected_matrix.iter().cloned().collect(),
            ),
            electrode_shapes: CategorySelection::Many(
                self.selected_shapes.iter().cloned().collect(),
            ),
        }
    }

    /// Re-run the pipeline after a control change.
    pub fn refresh_chart(&mut self) {
        let mut chart = render(&self.dataset, &self.filter_state());
        if self.size_by_area {
            chart = chart.with_area_sizing();
        }
        self.chart = chart;
    }

    pub fn domain(&self, field: CategoryField) -> &[String] {
        match field {
            CategoryField::MatrixCategory => &self.domains.matrix_categories,
            CategoryField::ElectrodeShape => &self.domains.electrode_shapes,
        }
    }

    pub fn selection(&self, field: CategoryField) -> &BTreeSet<String> {
        match field {
            CategoryField::MatrixCategory => &self.selected_matrix,
            CategoryField::ElectrodeShape => &self.selected_shapes,
        }
    }

    fn selection_mut(&mut self, field: CategoryField) -> &mut BTreeSet<String> {
        match field {
            CategoryField::MatrixCategory => &mut self.selected_matrix,
            CategoryField::ElectrodeShape => &mut self.selected_shapes,
        }
    }

    /// Toggle a single value in a category selector.
    pub fn toggle_category(&mut self, field: CategoryField, value: &str) {
        let selected = self.selection_mut(field);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refresh_chart();
    }

    /// Select every value in a category selector.
    pub fn select_all(&mut self, field: CategoryField) {
        let all: BTreeSet<String> = self.domain(field).iter().cloned().collect();
        *self.selection_mut(field) = all;
        self.refresh_chart();
    }

    /// Deselect every value in a category selector.
    pub fn select_none(&mut self, field: CategoryField) {
        self.selection_mut(field).clear();
        self.refresh_chart();
    }

    /// Restore the all-inclusive initial state.
    pub fn reset_filters(&mut self) {
        self.ph_low = self.domains.ph_range.0;
        self.ph_high = self.domains.ph_range.1;
        self.area_low = self.domains.area_range.0;
        self.area_high = self.domains.area_range.1;
        self.selected_matrix = self.domains.matrix_categories.iter().cloned().collect();
        self.selected_shapes = self.domains.electrode_shapes.iter().cloned().collect();
        self.refresh_chart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Record {
                dissipated_power_density: 1.0,
                log_reduction_rate: 0.2,
                organism: "Listeria".to_string(),
                sample_area: 10.0,
                ph_before: 4.0,
                matrix_category: "soil".to_string(),
                electrode_shape: "needle".to_string(),
            },
            Record {
                dissipated_power_density: 2.0,
                log_reduction_rate: 0.6,
                organism: "Salmonella".to_string(),
                sample_area: 20.0,
                ph_before: 9.0,
                matrix_category: "water".to_string(),
                electrode_shape: "plate".to_string(),
            },
        ])
    }

    fn fresh_state() -> AppState {
        let data = dataset();
        let domains = FilterDomains::from_dataset(&data);
        AppState::new(data, domains)
    }

    #[test]
    fn initial_state_shows_everything() {
        let state = fresh_state();
        assert_eq!(state.chart.points.len(), 2);
        assert_eq!(state.selected_matrix.len(), 2);
        assert_eq!((state.ph_low, state.ph_high), (4.0, 9.0));
    }

    #[test]
    fn toggling_a_category_refreshes_the_chart() {
        let mut state = fresh_state();
        state.toggle_category(CategoryField::MatrixCategory, "water");
        assert_eq!(state.chart.points.len(), 1);
        assert_eq!(state.chart.points[0].matrix_category, "soil");

        state.toggle_category(CategoryField::MatrixCategory, "water");
        assert_eq!(state.chart.points.len(), 2);
    }

    #[test]
    fn select_none_then_reset_roundtrips() {
        let mut state = fresh_state();
        state.select_none(CategoryField::ElectrodeShape);
        assert!(state.chart.points.is_empty());

        state.reset_filters();
        assert_eq!(state.chart.points.len(), 2);
    }

    #[test]
    fn size_toggle_only_changes_the_encoding() {
        let mut state = fresh_state();
        let before = state.chart.points.clone();

        state.size_by_area = true;
        state.refresh_chart();
        assert_eq!(state.chart.size_field, Some("area_of_the_sample_cm2"));
        assert_eq!(state.chart.points, before);
    }
}
