// src/data_analysis/binning.rs

use ndarray::{Array1, ArrayView1, Axis};

use crate::constants::CONCENTRATION_COLUMNS;
use crate::data_input::measurement_data::MeasurementTable;
use crate::error::RenderError;

/// Number of whole bins that fit into `row_count` rows.
pub fn bin_count(row_count: usize, bin_size: usize) -> usize {
    if bin_size == 0 {
        return 0;
    }
    row_count / bin_size
}

/// Trailing rows that do not fill a whole bin and are left out of the averages.
pub fn dropped_rows(row_count: usize, bin_size: usize) -> usize {
    if bin_size == 0 {
        return row_count;
    }
    row_count % bin_size
}

/// Averages consecutive, non-overlapping runs of `bin_size` values.
///
/// Element `i` of the result is the mean of `values[i * bin_size..(i + 1) * bin_size]`.
/// Values past the last whole bin are ignored, so fewer than `bin_size` inputs
/// give an empty series. A `NaN` anywhere in a bin makes that bin `NaN`.
pub fn bin_average(values: &[f64], bin_size: usize) -> Result<Array1<f64>, RenderError> {
    if bin_size == 0 {
        return Err(RenderError::InvalidBinSize(bin_size));
    }
    let num_bins = bin_count(values.len(), bin_size);

    // Reshape the trimmed series into one row per bin, then average across each row.
    let trimmed = ArrayView1::from(&values[..num_bins * bin_size]);
    let bins = trimmed.into_shape((num_bins, bin_size))?;
    bins.mean_axis(Axis(1))
        .ok_or(RenderError::InvalidBinSize(bin_size))
}

/// Every plotted column reduced to one value per bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedMeasurements {
    pub bin_size: usize,
    pub dropped_rows: usize,
    pub time: Array1<f64>,
    pub real_voltage: Array1<f64>,
    pub simulated_voltage: Array1<f64>,
    pub concentrations: [Array1<f64>; 4], // Ordered as CONCENTRATION_COLUMNS
}

impl BinnedMeasurements {
    /// Applies [`bin_average`] to the time axis and every measurement column.
    pub fn from_table(table: &MeasurementTable, bin_size: usize) -> Result<Self, RenderError> {
        let dropped = dropped_rows(table.row_count(), bin_size);
        let binned = Self {
            bin_size,
            dropped_rows: dropped,
            time: bin_average(&table.time, bin_size)?,
            real_voltage: bin_average(&table.real_voltage, bin_size)?,
            simulated_voltage: bin_average(&table.simulated_voltage, bin_size)?,
            concentrations: [
                bin_average(&table.concentrations[0], bin_size)?,
                bin_average(&table.concentrations[1], bin_size)?,
                bin_average(&table.concentrations[2], bin_size)?,
                bin_average(&table.concentrations[3], bin_size)?,
            ],
        };

        if dropped > 0 {
            log::warn!(
                "Dropping {} trailing row(s) that do not fill a bin of {}.",
                dropped,
                bin_size
            );
        }
        log::info!(
            "Binned {} rows into {} bins of {} rows.",
            table.row_count(),
            binned.num_bins(),
            bin_size
        );
        Ok(binned)
    }

    pub fn num_bins(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Concentration series paired with their column names.
    pub fn concentration_series(&self) -> impl Iterator<Item = (&'static str, &Array1<f64>)> {
        CONCENTRATION_COLUMNS.iter().copied().zip(self.concentrations.iter())
    }
}


// src/data_analysis/binning.rs
