// src/data_input/data_source.rs

use std::path::PathBuf;

use crate::data_analysis::binning::BinnedMeasurements;
use crate::data_input::csv_loader::{load_experimental_trace, load_measurements};
use crate::data_input::measurement_data::ExperimentalTrace;
use crate::error::RenderError;

/// Where the plotted data comes from. Loading can be repeated, which is how the
/// viewer refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub measurements: PathBuf,
    pub experimental: Option<PathBuf>,
    pub bin_size: usize,
}

/// Binned measurements plus the optional experimental overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub binned: BinnedMeasurements,
    pub experimental: Option<ExperimentalTrace>,
}

impl DataSource {
    /// Reads and bins the measurement file, then reads the overlay if one is set.
    pub fn load(&self) -> Result<LoadedData, RenderError> {
        let table = load_measurements(&self.measurements)?;
        let binned = BinnedMeasurements::from_table(&table, self.bin_size)?;
        let experimental = self
            .experimental
            .as_deref()
            .map(load_experimental_trace)
            .transpose()?;
        Ok(LoadedData {
            binned,
            experimental,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reports_missing_measurements() {
        let source = DataSource {
            measurements: PathBuf::from("definitely/not/here/output.csv"),
            experimental: None,
            bin_size: 5,
        };
        assert!(matches!(source.load(), Err(RenderError::Io(_))));
    }
}

// src/data_input/data_source.rs
