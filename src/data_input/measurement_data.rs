// src/data_input/measurement_data.rs

use crate::constants::{
    COLUMN_REAL_VOLTAGE, COLUMN_SIMULATED_VOLTAGE, COLUMN_TIME, CONCENTRATION_COLUMNS,
};

/// Columns the loader must find, in the order they are stored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COLUMN_TIME,
    COLUMN_REAL_VOLTAGE,
    COLUMN_SIMULATED_VOLTAGE,
    CONCENTRATION_COLUMNS[0],
    CONCENTRATION_COLUMNS[1],
    CONCENTRATION_COLUMNS[2],
    CONCENTRATION_COLUMNS[3],
];

/// Column-oriented view of the measurement CSV.
/// Missing or empty cells are stored as `f64::NAN`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeasurementTable {
    pub time: Vec<f64>,                    // Time (s).
    pub real_voltage: Vec<f64>,            // Measured voltage (V).
    pub simulated_voltage: Vec<f64>,       // Model voltage (V).
    pub concentrations: [Vec<f64>; 4],     // Ordered as CONCENTRATION_COLUMNS (mol/m³).
}

impl MeasurementTable {
    pub fn row_count(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Unbinned experimental voltage trace drawn over the binned voltage panel.
/// The first CSV column is time (s), the second voltage (V); headers are not matched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExperimentalTrace {
    pub time: Vec<f64>,
    pub voltage: Vec<f64>,
}

impl ExperimentalTrace {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

// src/data_input/measurement_data.rs
