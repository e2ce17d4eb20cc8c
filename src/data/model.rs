// ---------------------------------------------------------------------------
// Record – one experimental observation
// ---------------------------------------------------------------------------

/// A single decontamination experiment (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Dissipated power per plasma volume (W/cm³) – x-axis.
    pub dissipated_power_density: f64,
    /// Log₁₀D decimal reduction rate (log/min) – y-axis.
    pub log_reduction_rate: f64,
    /// Target organism genus – color channel.
    pub organism: String,
    /// Area of the treated sample (cm²) – filter dimension and size channel.
    pub sample_area: f64,
    /// pH of the matrix before treatment – filter dimension.
    pub ph_before: f64,
    /// Food matrix category – filter dimension.
    pub matrix_category: String,
    /// Shape of the upper electrode – filter dimension.
    pub electrode_shape: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup, read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of experiment records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct organism genera in first-seen order, for the color mapping.
    pub fn organisms(&self) -> Vec<String> {
        distinct_values(self.records.iter().map(|r| r.organism.as_str()))
    }
}

// ---------------------------------------------------------------------------
// FilterDomains – admissible values for each filter control
// ---------------------------------------------------------------------------

/// Control bounds derived once from the dataset: numeric `(min, max)` pairs
/// for the sliders and distinct value lists for the category selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDomains {
    /// Raw pH bounds.
    pub ph_range: (f64, f64),
    /// Sample-area bounds, rounded to one decimal place. Filtering rounds
    /// the compared values the same way, so boundary rows stay included.
    pub area_range: (f64, f64),
    /// Matrix categories in first-seen order; empty when the column is absent.
    pub matrix_categories: Vec<String>,
    /// Electrode shapes in first-seen order; empty when the column is absent.
    pub electrode_shapes: Vec<String>,
}

impl FilterDomains {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (area_min, area_max) = numeric_bounds(dataset.records.iter().map(|r| r.sample_area));
        FilterDomains {
            ph_range: numeric_bounds(dataset.records.iter().map(|r| r.ph_before)),
            area_range: (round_tenth(area_min), round_tenth(area_max)),
            matrix_categories: distinct_values(
                dataset.records.iter().map(|r| r.matrix_category.as_str()),
            ),
            electrode_shapes: distinct_values(
                dataset.records.iter().map(|r| r.electrode_shape.as_str()),
            ),
        }
    }
}

/// Round to one decimal place, the precision the area slider works at.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `(min, max)` over the values; `(0.0, 0.0)` for an empty dataset so the
/// sliders still get finite bounds.
fn numeric_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Distinct non-empty values in first-seen order. Records from a source
/// without the column carry empty strings, which leaves the list empty.
fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if v.is_empty() {
            continue;
        }
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ph: f64, area: f64, matrix: &str, shape: &str) -> Record {
        Record {
            dissipated_power_density: 1.0,
            log_reduction_rate: 0.5,
            organism: "Listeria".to_string(),
            sample_area: area,
            ph_before: ph,
            matrix_category: matrix.to_string(),
            electrode_shape: shape.to_string(),
        }
    }

    #[test]
    fn domains_cover_numeric_bounds_and_round_area() {
        let dataset = Dataset::new(vec![
            record(4.0, 10.04, "soil", "needle"),
            record(9.0, 24.96, "water", "plate"),
        ]);
        let domains = FilterDomains::from_dataset(&dataset);
        assert_eq!(domains.ph_range, (4.0, 9.0));
        assert_eq!(domains.area_range, (10.0, 25.0));
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let dataset = Dataset::new(vec![
            record(4.0, 1.0, "water", "plate"),
            record(5.0, 1.0, "soil", "needle"),
            record(6.0, 1.0, "water", "plate"),
        ]);
        let domains = FilterDomains::from_dataset(&dataset);
        assert_eq!(domains.matrix_categories, vec!["water", "soil"]);
        assert_eq!(domains.electrode_shapes, vec!["plate", "needle"]);
    }

    #[test]
    fn absent_categorical_column_yields_empty_domain() {
        let dataset = Dataset::new(vec![record(4.0, 1.0, "", "")]);
        let domains = FilterDomains::from_dataset(&dataset);
        assert!(domains.matrix_categories.is_empty());
        assert!(domains.electrode_shapes.is_empty());
    }

    #[test]
    fn empty_dataset_has_finite_bounds() {
        let domains = FilterDomains::from_dataset(&Dataset::default());
        assert_eq!(domains.ph_range, (0.0, 0.0));
        assert_eq!(domains.area_range, (0.0, 0.0));
    }

    #[test]
    fn round_tenth_matches_slider_precision() {
        assert_eq!(round_tenth(10.04), 10.0);
        assert_eq!(round_tenth(9.96), 10.0);
        assert_eq!(round_tenth(10.05), 10.1);
    }
}
