use serde::Deserialize;

use super::chart::{ChartPoint, ChartSpec};
use super::model::{round_tenth, Dataset, Record};

// ---------------------------------------------------------------------------
// CategorySelection – scalar-or-collection dropdown value
// ---------------------------------------------------------------------------

/// A dropdown selection as emitted by the hosting controls: a single value
/// when the user picked exactly one option, a list otherwise. Both shapes
/// carry set-membership semantics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategorySelection {
    One(String),
    Many(Vec<String>),
}

impl CategorySelection {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            CategorySelection::One(v) => v == value,
            CategorySelection::Many(vs) => vs.iter().any(|v| v == value),
        }
    }

    /// An empty list selects nothing; a scalar always selects one value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CategorySelection::Many(vs) if vs.is_empty())
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        CategorySelection::One(value.to_string())
    }
}

impl From<Vec<String>> for CategorySelection {
    fn from(values: Vec<String>) -> Self {
        CategorySelection::Many(values)
    }
}

// ---------------------------------------------------------------------------
// FilterState – the current combination of control values
// ---------------------------------------------------------------------------

/// Snapshot of the four filter controls, passed by value per recomputation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterState {
    pub ph_range: (f64, f64),
    pub area_range: (f64, f64),
    pub matrix_categories: CategorySelection,
    pub electrode_shapes: CategorySelection,
}

// ---------------------------------------------------------------------------
// The filter-and-project pipeline
// ---------------------------------------------------------------------------

/// Project the records passing all four filters into a fresh [`ChartSpec`].
///
/// Pure function of its inputs: the dataset is never mutated and no state
/// survives between calls.
pub fn render(dataset: &Dataset, filters: &FilterState) -> ChartSpec {
    let points = dataset
        .records
        .iter()
        .filter(|r| passes(r, filters))
        .map(ChartPoint::from_record)
        .collect();
    ChartSpec::new(points)
}

/// Conjunction of the four filter predicates. Numeric comparisons first.
fn passes(record: &Record, filters: &FilterState) -> bool {
    in_range(filters.ph_range, record.ph_before)
        && in_range(rounded(filters.area_range), round_tenth(record.sample_area))
        && filters.matrix_categories.contains(&record.matrix_category)
        && filters.electrode_shapes.contains(&record.electrode_shape)
}

/// Inclusive on both ends; an inverted range (low > high) admits nothing.
fn in_range((low, high): (f64, f64), value: f64) -> bool {
    low <= value && value <= high
}

/// The area slider works at one-decimal precision, so the supplied range is
/// rounded the same way as the compared record values.
fn rounded((low, high): (f64, f64)) -> (f64, f64) {
    (round_tenth(low), round_tenth(high))
}
