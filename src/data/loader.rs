use std::io::Read;

use thiserror::Error;

use super::model::{Dataset, FilterDomains, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Published location of the experiment table.
pub const DATASET_URL: &str = "https://raw.githubusercontent.com/gpampoukis/ntp_interactive_plot/583c584b00ce5d7ae4ba3bc89145cd9e12a9d5a7/my_dataframe.csv";

/// Failure to produce a usable dataset. Every variant is fatal at startup:
/// the dashboard has no useful degraded mode without its data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset source is unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("dataset could not be parsed: {0}")]
    Malformed(#[from] csv::Error),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Fetch and parse the experiment table, then derive the filter-control
/// domains. Runs exactly once per process lifetime; no retry.
pub fn load() -> Result<(Dataset, FilterDomains), DataError> {
    let body = reqwest::blocking::get(DATASET_URL)?
        .error_for_status()?
        .text()?;
    let dataset = parse_csv(body.as_bytes())?;
    log::info!("Fetched {} experiment records", dataset.len());

    let domains = FilterDomains::from_dataset(&dataset);
    Ok((dataset, domains))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the experiment table from CSV with a header row.
///
/// The four numeric columns are required; a missing column or an unparsable
/// cell fails the load. The categorical columns are optional: when absent,
/// the affected fields stay empty and the matching filter control simply
/// offers no options.
pub fn parse_csv<R: Read>(input: R) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let required = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn(name))
    };
    let optional = |name: &str| -> Option<usize> {
        let idx = headers.iter().position(|h| h == name);
        if idx.is_none() {
            log::warn!("column '{name}' not found; the matching filter will offer no options");
        }
        idx
    };

    let power_idx = required("dis_W_cm3_of_plasma_volume")?;
    let logd_idx = required("logd_log_min")?;
    let ph_idx = required("ph_before")?;
    let area_idx = required("area_of_the_sample_cm2")?;
    let genus_idx = optional("genus");
    let matrix_idx = optional("matrix_category");
    let shape_idx = optional("upper_electrode_shape");

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let line = result?;

        let number = |idx: usize, column: &'static str| -> Result<f64, DataError> {
            let raw = line.get(idx).unwrap_or("").trim();
            raw.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                row,
                column,
                value: raw.to_string(),
            })
        };
        let text =
            |idx: Option<usize>| idx.and_then(|i| line.get(i)).unwrap_or("").trim().to_string();

        records.push(Record {
            dissipated_power_density: number(power_idx, "dis_W_cm3_of_plasma_volume")?,
            log_reduction_rate: number(logd_idx, "logd_log_min")?,
            ph_before: number(ph_idx, "ph_before")?,
            sample_area: number(area_idx, "area_of_the_sample_cm2")?,
            organism: text(genus_idx),
            matrix_category: text(matrix_idx),
            electrode_shape: text(shape_idx),
        });
    }

    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CSV: &str = "\
dis_W_cm3_of_plasma_volume,logd_log_min,ph_before,area_of_the_sample_cm2,genus,matrix_category,upper_electrode_shape
1.5,0.8,4.0,10.04,Listeria,soil,needle
2.5,1.2,6.5,12.5,Salmonella,water,plate
3.0,0.4,9.0,24.96,Listeria,soil,plate
";

    #[test]
    fn parses_all_columns() {
        let dataset = parse_csv(FULL_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records[0];
        assert_eq!(first.dissipated_power_density, 1.5);
        assert_eq!(first.log_reduction_rate, 0.8);
        assert_eq!(first.ph_before, 4.0);
        assert_eq!(first.sample_area, 10.04);
        assert_eq!(first.organism, "Listeria");
        assert_eq!(first.matrix_category, "soil");
        assert_eq!(first.electrode_shape, "needle");
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "\
dis_W_cm3_of_plasma_volume,logd_log_min,area_of_the_sample_cm2
1.5,0.8,10.0
";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("ph_before")));
    }

    #[test]
    fn unparsable_numeric_cell_is_fatal() {
        let csv = "\
dis_W_cm3_of_plasma_volume,logd_log_min,ph_before,area_of_the_sample_cm2
1.5,0.8,not-a-ph,10.0
";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        match err {
            DataError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, "ph_before");
                assert_eq!(value, "not-a-ph");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absent_categorical_columns_degrade_to_no_options() {
        let csv = "\
dis_W_cm3_of_plasma_volume,logd_log_min,ph_before,area_of_the_sample_cm2
1.5,0.8,4.0,10.0
";
        let dataset = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records[0].matrix_category, "");

        let domains = FilterDomains::from_dataset(&dataset);
        assert!(domains.matrix_categories.is_empty());
        assert!(domains.electrode_shapes.is_empty());
        assert_eq!(domains.ph_range, (4.0, 4.0));
    }

    #[test]
    fn derived_domains_follow_the_table() {
        let dataset = parse_csv(FULL_CSV.as_bytes()).unwrap();
        let domains = FilterDomains::from_dataset(&dataset);
        assert_eq!(domains.ph_range, (4.0, 9.0));
        assert_eq!(domains.area_range, (10.0, 25.0));
        assert_eq!(domains.matrix_categories, vec!["soil", "water"]);
        assert_eq!(domains.electrode_shapes, vec!["needle", "plate"]);
    }
}
