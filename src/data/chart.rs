use super::model::Record;

// ---------------------------------------------------------------------------
// ChartSpec – the render-ready description of one filtered view
// ---------------------------------------------------------------------------

pub const X_AXIS_TITLE: &str = "Dissipated power per plasma volume (W/cm³)";
pub const Y_AXIS_TITLE: &str = "Log₁₀D (log min)";

/// Field the points are color-grouped by.
pub const COLOR_FIELD: &str = "genus";
/// Field the optional size encoding is driven by.
pub const SIZE_FIELD: &str = "area_of_the_sample_cm2";

/// One plotted point: position plus everything shown in the hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub organism: String,
    pub sample_area: f64,
    pub ph_before: f64,
    pub matrix_category: String,
    pub electrode_shape: String,
}

impl ChartPoint {
    pub fn from_record(record: &Record) -> Self {
        ChartPoint {
            x: record.dissipated_power_density,
            y: record.log_reduction_rate,
            organism: record.organism.clone(),
            sample_area: record.sample_area,
            ph_before: record.ph_before,
            matrix_category: record.matrix_category.clone(),
            electrode_shape: record.electrode_shape.clone(),
        }
    }

    /// Hover annotation shown next to the point.
    pub fn hover_text(&self) -> String {
        format!(
            "{}\narea: {} cm²\npH before: {}\nmatrix: {}\nelectrode: {}",
            self.organism,
            self.sample_area,
            self.ph_before,
            self.matrix_category,
            self.electrode_shape,
        )
    }
}

/// The chart description handed to the rendering layer. Freshly constructed
/// on every recomputation; zero points with valid axes is a valid chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub points: Vec<ChartPoint>,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub color_field: &'static str,
    /// `Some` when sample area is additionally mapped to marker size.
    pub size_field: Option<&'static str>,
}

impl ChartSpec {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        ChartSpec {
            points,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            color_field: COLOR_FIELD,
            size_field: None,
        }
    }

    /// Turn on the size encoding variant.
    pub fn with_area_sizing(mut self) -> Self {
        self.size_field = Some(SIZE_FIELD);
        self
    }
}
